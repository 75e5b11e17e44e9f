//! User management REST API
//!
//! CRUD over a relational `users` table plus password-based JWT token
//! issuance. The repository and credential utilities are constructed once
//! at startup and handed to the handlers through [`api::AppState`].

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::UserServiceTrait;
use api::AppState;
use config::{DatabaseConfig, StorageBackend};
use infrastructure::auth::{JwtConfig, JwtService, TokenIssuer};
use infrastructure::storage::{connect_pool, PostgresConfig};
use infrastructure::user::{
    Argon2Hasher, InMemoryUserRepository, PostgresUserRepository, UserService,
};

/// Build the application state from configuration
///
/// Selects the repository backend, wires the password hasher, and loads
/// the signing key - the single place where dependencies are assembled.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let hasher = Arc::new(Argon2Hasher::new());

    let token_issuer: Arc<dyn TokenIssuer> = Arc::new(JwtService::new(JwtConfig::new(
        config.auth.secret.clone(),
        config.auth.token_ttl_minutes,
    )));

    let user_service: Arc<dyn UserServiceTrait> = match config.storage.backend {
        StorageBackend::Memory => {
            let repository = Arc::new(InMemoryUserRepository::new());
            Arc::new(UserService::new(repository, hasher))
        }
        StorageBackend::Postgres => {
            let pool = connect_pool(&postgres_config(&config.database)).await?;
            let repository = Arc::new(PostgresUserRepository::new(pool));
            Arc::new(UserService::new(repository, hasher))
        }
    };

    Ok(AppState::new(user_service, token_issuer))
}

/// Map the database section of the app config onto the pool configuration
pub fn postgres_config(db: &DatabaseConfig) -> PostgresConfig {
    PostgresConfig {
        url: db.url.clone(),
        max_connections: db.max_connections,
        min_connections: db.min_connections,
        connect_timeout_secs: db.connect_timeout_secs,
        idle_timeout_secs: db.idle_timeout_secs,
    }
}
