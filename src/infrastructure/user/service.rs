//! User service composing the repository and the password hasher

use std::sync::Arc;

use tracing::debug;

use crate::domain::user::{
    validate_email, validate_password, validate_username, NewUser, User, UserRepository,
    UserUpdate,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Input for creating or replacing a user
///
/// Updates replace username, email, and password wholesale, so create and
/// update share one input shape.
#[derive(Debug, Clone)]
pub struct UserInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// User service implementing the CRUD operations and credential checks
#[derive(Debug)]
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Create a new user
    ///
    /// Pre-checks uniqueness before inserting. A record colliding on both
    /// username and email reports the username conflict; the storage
    /// constraint remains the correctness mechanism under concurrency.
    pub async fn create(&self, input: UserInput) -> Result<User, DomainError> {
        validate_input(&input)?;

        if let Some(existing) = self
            .repository
            .find_by_username_or_email(&input.username, &input.email)
            .await?
        {
            let message = if existing.username() == input.username {
                "Username already exists"
            } else {
                "Email already exists"
            };
            return Err(DomainError::conflict(message));
        }

        let password_hash = self.hasher.hash(&input.password)?;

        let user = self
            .repository
            .insert(NewUser {
                username: input.username,
                email: input.email,
                password_hash,
            })
            .await?;

        debug!(id = user.id(), username = %user.username(), "User created");

        Ok(user)
    }

    /// Page of users ordered by creation (id)
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, DomainError> {
        self.repository.list(limit, offset).await
    }

    /// Get a user by id
    pub async fn get(&self, id: i64) -> Result<Option<User>, DomainError> {
        self.repository.get(id).await
    }

    /// Replace a user's username, email, and password wholesale
    pub async fn update(&self, id: i64, input: UserInput) -> Result<User, DomainError> {
        validate_input(&input)?;

        let password_hash = self.hasher.hash(&input.password)?;

        let user = self
            .repository
            .update(
                id,
                UserUpdate {
                    username: input.username,
                    email: input.email,
                    password_hash,
                },
            )
            .await?;

        debug!(id = user.id(), "User updated");

        Ok(user)
    }

    /// Delete a user by id
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.repository.delete(id).await?;

        debug!(id, "User deleted");

        Ok(())
    }

    /// Check credentials for login
    ///
    /// Returns `None` for an unknown email and for a failed password check
    /// alike; callers cannot distinguish the two.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let user = match self.repository.get_by_email(email).await? {
            Some(u) => u,
            None => return Ok(None),
        };

        if !self.hasher.verify(password, user.password_hash()) {
            return Ok(None);
        }

        Ok(Some(user))
    }
}

fn validate_input(input: &UserInput) -> Result<(), DomainError> {
    validate_username(&input.username).map_err(|e| DomainError::validation(e.to_string()))?;
    validate_email(&input.email).map_err(|e| DomainError::validation(e.to_string()))?;
    validate_password(&input.password).map_err(|e| DomainError::validation(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::user::password::Argon2Hasher;
    use crate::infrastructure::user::repository::InMemoryUserRepository;

    fn create_service() -> UserService<InMemoryUserRepository, Argon2Hasher> {
        let repository = Arc::new(InMemoryUserRepository::new());
        let hasher = Arc::new(Argon2Hasher::new());
        UserService::new(repository, hasher)
    }

    fn input(username: &str, email: &str, password: &str) -> UserInput {
        UserInput {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user() {
        let service = create_service();

        let user = service
            .create(input("alice", "a@x.com", "secret"))
            .await
            .unwrap();

        assert_eq!(user.id(), 1);
        assert_eq!(user.username(), "alice");
        assert_eq!(user.email(), "a@x.com");
    }

    #[tokio::test]
    async fn test_create_stores_hash_not_plaintext() {
        let service = create_service();

        let user = service
            .create(input("alice", "a@x.com", "secret"))
            .await
            .unwrap();

        assert_ne!(user.password_hash(), "secret");
        assert!(Argon2Hasher::new().verify("secret", user.password_hash()));
    }

    #[tokio::test]
    async fn test_create_duplicate_username() {
        let service = create_service();

        service
            .create(input("alice", "a@x.com", "secret"))
            .await
            .unwrap();

        let err = service
            .create(input("alice", "other@x.com", "secret"))
            .await
            .unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(err.to_string(), "Conflict: Username already exists");
    }

    #[tokio::test]
    async fn test_create_duplicate_email() {
        let service = create_service();

        service
            .create(input("alice", "a@x.com", "secret"))
            .await
            .unwrap();

        let err = service
            .create(input("bob", "a@x.com", "secret"))
            .await
            .unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(err.to_string(), "Conflict: Email already exists");
    }

    #[tokio::test]
    async fn test_double_collision_reports_username() {
        let service = create_service();

        service
            .create(input("alice", "a@x.com", "secret"))
            .await
            .unwrap();

        let err = service
            .create(input("alice", "a@x.com", "secret"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Conflict: Username already exists");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let service = create_service();

        let err = service
            .create(input("", "a@x.com", "secret"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));

        let err = service
            .create(input("alice", "not-an-email", "secret"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));

        let err = service
            .create(input("alice", "a@x.com", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_get() {
        let service = create_service();

        let created = service
            .create(input("alice", "a@x.com", "secret"))
            .await
            .unwrap();

        let fetched = service.get(created.id()).await.unwrap().unwrap();
        assert_eq!(fetched.username(), "alice");

        assert!(service.get(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_and_rehashes() {
        let service = create_service();

        let created = service
            .create(input("alice", "a@x.com", "secret"))
            .await
            .unwrap();

        let updated = service
            .update(created.id(), input("alice2", "a2@x.com", "hunter2"))
            .await
            .unwrap();

        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.username(), "alice2");
        assert_eq!(updated.email(), "a2@x.com");

        let hasher = Argon2Hasher::new();
        assert!(hasher.verify("hunter2", updated.password_hash()));
        assert!(!hasher.verify("secret", updated.password_hash()));
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let service = create_service();

        let err = service
            .update(999, input("alice", "a@x.com", "secret"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_collision_conflicts() {
        let service = create_service();

        service
            .create(input("alice", "a@x.com", "secret"))
            .await
            .unwrap();
        let bob = service
            .create(input("bob", "b@x.com", "secret"))
            .await
            .unwrap();

        let err = service
            .update(bob.id(), input("alice", "b@x.com", "secret"))
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_delete() {
        let service = create_service();

        let created = service
            .create(input("alice", "a@x.com", "secret"))
            .await
            .unwrap();

        service.delete(created.id()).await.unwrap();
        assert!(service.get(created.id()).await.unwrap().is_none());

        let err = service.delete(created.id()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let service = create_service();

        service
            .create(input("alice", "a@x.com", "secret"))
            .await
            .unwrap();

        let user = service.authenticate("a@x.com", "secret").await.unwrap();
        assert_eq!(user.unwrap().username(), "alice");
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let service = create_service();

        service
            .create(input("alice", "a@x.com", "secret"))
            .await
            .unwrap();

        let user = service.authenticate("a@x.com", "wrong").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let service = create_service();

        let user = service.authenticate("missing@x.com", "secret").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_list_paging() {
        let service = create_service();

        for i in 0..5 {
            service
                .create(input(
                    &format!("user{}", i),
                    &format!("u{}@x.com", i),
                    "secret",
                ))
                .await
                .unwrap();
        }

        let page = service.list(2, 0).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].username(), "user0");

        assert!(service.list(10, 5).await.unwrap().is_empty());
    }
}
