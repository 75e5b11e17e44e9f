//! User entity and write models

use serde::{Deserialize, Serialize};

/// User entity persisted in storage
///
/// The identifier is assigned by storage on insert and never changes
/// afterwards. Username and email are unique across all users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Storage-assigned identifier
    id: i64,
    /// Username, unique across all users
    username: String,
    /// Email, unique across all users
    email: String,
    /// Argon2 password hash - never exposed in serialization
    #[serde(skip_serializing, default)]
    password_hash: String,
}

impl User {
    pub fn new(
        id: i64,
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Replace every mutable field wholesale
    pub fn apply_update(&mut self, update: UserUpdate) {
        self.username = update.username;
        self.email = update.email;
        self.password_hash = update.password_hash;
    }
}

/// Write model for inserting a user; the id is assigned by storage
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Write model for updating a user; all fields are replaced wholesale
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
