//! Domain layer - Core business logic and entities

pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{
    validate_email, validate_password, validate_username, NewUser, User, UserRepository,
    UserUpdate, UserValidationError,
};
