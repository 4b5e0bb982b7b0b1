pub mod accounts;
pub mod admins;
pub mod error;
pub mod restaurants;

pub use accounts::CreateUserRequest;
pub use accounts::User;
pub use admins::Admin;
pub use admins::Privileges;
pub use error::ModelError;
pub use error::Result;
pub use restaurants::IceCreamStand;
pub use restaurants::Restaurant;

/// Multi-line, human readable profile of an entity.
pub trait Describe {
    fn describe(&self) -> String;
}
