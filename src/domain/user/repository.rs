//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, User, UserUpdate};
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// Uniqueness of username and email is guaranteed by the implementation:
/// `insert` and `update` return `DomainError::Conflict` when a write would
/// duplicate either column, regardless of any pre-check the caller ran.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by id
    async fn get(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Get a user by email (login lookup)
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// First user matching either username or email, if any
    ///
    /// Used solely for the uniqueness pre-check before insert.
    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, DomainError>;

    /// Insert a new user, assigning its id
    async fn insert(&self, user: NewUser) -> Result<User, DomainError>;

    /// Replace username, email, and password hash of an existing user
    ///
    /// Fails with `NotFound` if no user with `id` exists.
    async fn update(&self, id: i64, update: UserUpdate) -> Result<User, DomainError>;

    /// Delete a user
    ///
    /// Fails with `NotFound` if no user with `id` exists.
    async fn delete(&self, id: i64) -> Result<(), DomainError>;

    /// Page of users ordered by id ascending
    ///
    /// `limit = 0` and out-of-range offsets yield an empty page, not an
    /// error.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, DomainError>;
}
