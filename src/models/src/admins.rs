use std::ops::Deref;
use std::ops::DerefMut;

use serde::Deserialize;
use serde::Serialize;

use crate::accounts::User;
use crate::Describe;

pub const DEFAULT_PRIVILEGES: [&str; 4] = [
    "can add post",
    "can delete post",
    "can ban user",
    "can reset passwords",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Privileges {
    pub privileges: Vec<String>,
}

impl Privileges {
    pub fn new(privileges: Vec<String>) -> Self {
        Privileges { privileges }
    }

    pub fn show(&self) -> String {
        let mut out = String::from("Admin privileges:");
        for privilege in &self.privileges {
            out.push_str("\n- ");
            out.push_str(privilege);
        }

        out
    }

    pub fn contains(&self, privilege: &str) -> bool {
        self.privileges.iter().any(|v| v == privilege)
    }
}

impl Default for Privileges {
    fn default() -> Self {
        Privileges::new(DEFAULT_PRIVILEGES.iter().map(|v| v.to_string()).collect())
    }
}

/// A user with an attached set of privileges.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub user: User,
    pub privileges: Privileges,
}

impl Admin {
    pub fn new(user: User) -> Self {
        Self::with_privileges(user, Privileges::default())
    }

    pub fn with_privileges(user: User, privileges: Privileges) -> Self {
        Admin { user, privileges }
    }
}

impl Deref for Admin {
    type Target = User;

    fn deref(&self) -> &Self::Target {
        &self.user
    }
}

impl DerefMut for Admin {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.user
    }
}

impl Describe for Admin {
    fn describe(&self) -> String {
        self.user.describe()
    }
}
