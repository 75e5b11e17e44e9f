//! User input validation

use thiserror::Error;

/// Errors that can occur during user input validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username exceeds maximum length of {0} characters")]
    UsernameTooLong(usize),

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Email must contain '@'")]
    InvalidEmail,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

const MAX_USERNAME_LENGTH: usize = 64;

/// Validate a username
///
/// Deliberately permissive: uniqueness is enforced separately, and the
/// schema layer has already shaped the request. Only emptiness and an
/// upper length bound are rejected here.
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if username.is_empty() {
        return Err(UserValidationError::EmptyUsername);
    }

    if username.len() > MAX_USERNAME_LENGTH {
        return Err(UserValidationError::UsernameTooLong(MAX_USERNAME_LENGTH));
    }

    Ok(())
}

/// Validate an email address
///
/// Only the coarsest structural check; full address validation belongs to
/// the schema layer.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    if !email.contains('@') {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate a plaintext password before hashing
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.is_empty() {
        return Err(UserValidationError::EmptyPassword);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("a").is_ok());
    }

    #[test]
    fn test_empty_username() {
        assert_eq!(
            validate_username(""),
            Err(UserValidationError::EmptyUsername)
        );
    }

    #[test]
    fn test_username_too_long() {
        let long = "a".repeat(65);
        assert_eq!(
            validate_username(&long),
            Err(UserValidationError::UsernameTooLong(64))
        );
    }

    #[test]
    fn test_valid_email() {
        assert!(validate_email("a@x.com").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert_eq!(validate_email(""), Err(UserValidationError::EmptyEmail));
        assert_eq!(
            validate_email("not-an-email"),
            Err(UserValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_password() {
        assert!(validate_password("secret").is_ok());
        assert_eq!(
            validate_password(""),
            Err(UserValidationError::EmptyPassword)
        );
    }
}
