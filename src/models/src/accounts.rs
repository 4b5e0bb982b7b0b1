use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::warn;

use crate::error::ModelError;
use crate::error::Result;
use crate::Describe;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub email: String,
    pub location: String,
}

impl CreateUserRequest {
    pub fn into_user(self) -> User {
        User {
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
            email: self.email,
            location: self.location,
            login_attempts: 0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub email: String,
    pub location: String,
    pub login_attempts: u32,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn greet(&self) -> String {
        format!("Hello, {}! Welcome back!", self.full_name())
    }

    pub fn increment_login_attempts(&mut self) {
        self.login_attempts = self.login_attempts.saturating_add(1);
        debug!(user = %self.email, attempts = self.login_attempts, "login attempt");
    }

    pub fn increment_login_attempts_by(&mut self, attempts: i64) -> Result<()> {
        if attempts <= 0 {
            let err = ModelError::NonPositiveIncrement(attempts);
            warn!(user = %self.email, "{err}");
            return Err(err);
        }

        let attempts = u32::try_from(attempts).unwrap_or(u32::MAX);
        self.login_attempts = self.login_attempts.saturating_add(attempts);
        Ok(())
    }

    pub fn reset_login_attempts(&mut self) {
        self.login_attempts = 0;
        debug!(user = %self.email, "login attempts reset");
    }
}

impl Describe for User {
    fn describe(&self) -> String {
        format!(
            "User Profile:\nName: {}\nAge: {}\nEmail: {}\nLocation: {}",
            self.full_name(),
            self.age,
            self.email,
            self.location
        )
    }
}
