//! Application state for shared services
//!
//! Services are constructed once at startup and injected here explicitly;
//! handlers never reach for ambient globals.

use std::sync::Arc;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::auth::TokenIssuer;
use crate::infrastructure::user::{PasswordHasher, UserInput, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub token_issuer: Arc<dyn TokenIssuer>,
}

impl AppState {
    pub fn new(
        user_service: Arc<dyn UserServiceTrait>,
        token_issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            user_service,
            token_issuer,
        }
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(&self, input: UserInput) -> Result<User, DomainError>;
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, DomainError>;
    async fn get(&self, id: i64) -> Result<Option<User>, DomainError>;
    async fn update(&self, id: i64, input: UserInput) -> Result<User, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
    async fn authenticate(&self, email: &str, password: &str)
        -> Result<Option<User>, DomainError>;
}

#[async_trait::async_trait]
impl<R, H> UserServiceTrait for UserService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn create(&self, input: UserInput) -> Result<User, DomainError> {
        UserService::create(self, input).await
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, DomainError> {
        UserService::list(self, limit, offset).await
    }

    async fn get(&self, id: i64) -> Result<Option<User>, DomainError> {
        UserService::get(self, id).await
    }

    async fn update(&self, id: i64, input: UserInput) -> Result<User, DomainError> {
        UserService::update(self, id, input).await
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        UserService::delete(self, id).await
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        UserService::authenticate(self, email, password).await
    }
}
