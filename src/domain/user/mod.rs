//! User domain
//!
//! Entity, write models, repository trait, and input validation for user
//! records.

mod entity;
mod repository;
mod validation;

pub use entity::{NewUser, User, UserUpdate};
pub use repository::UserRepository;
pub use validation::{validate_email, validate_password, validate_username, UserValidationError};
