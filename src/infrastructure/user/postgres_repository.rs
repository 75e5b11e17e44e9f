//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::user::{NewUser, User, UserRepository, UserUpdate};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserRepository
///
/// Uniqueness of username and email is enforced by the named unique
/// constraints on the `users` table; the application-layer pre-check only
/// shortens the error path. Unique violations surface as
/// `DomainError::Conflict` with the violated column named.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn get(&self, id: i64) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT id, username, email, password FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        Ok(row.map(|row| row_to_user(&row)))
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT id, username, email, password FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get user by email: {}", e)))?;

        Ok(row.map(|row| row_to_user(&row)))
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, email, password
            FROM users
            WHERE username = $1 OR email = $2
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(username)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to look up user: {}", e)))?;

        Ok(row.map(|row| row_to_user(&row)))
    }

    async fn insert(&self, user: NewUser) -> Result<User, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (username, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Failed to insert user"))?;

        Ok(row_to_user(&row))
    }

    async fn update(&self, id: i64, update: UserUpdate) -> Result<User, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = $2, email = $3, password = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&update.username)
        .bind(&update.email)
        .bind(&update.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Failed to update user"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User not found"));
        }

        Ok(User::new(
            id,
            update.username,
            update.email,
            update.password_hash,
        ))
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User not found"));
        }

        Ok(())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, email, password
            FROM users
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit.max(0))
        .bind(offset.max(0))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        Ok(rows.iter().map(row_to_user).collect())
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> User {
    let id: i64 = row.get("id");
    let username: String = row.get("username");
    let email: String = row.get("email");
    let password_hash: String = row.get("password");

    User::new(id, username, email, password_hash)
}

/// Translate a unique-constraint violation into a Conflict naming the
/// violated column; everything else becomes a Storage error.
fn map_unique_violation(e: sqlx::Error, context: &str) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            let message = match db_err.constraint() {
                Some(c) if c.contains("username") => "Username already exists",
                Some(c) if c.contains("email") => "Email already exists",
                _ => "Username or Email already exists",
            };
            return DomainError::conflict(message);
        }
    }

    DomainError::storage(format!("{}: {}", context, e))
}
