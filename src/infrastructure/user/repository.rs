//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserRepository, UserUpdate};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
///
/// A `BTreeMap` keyed by id keeps listing in insertion (id) order. Ids are
/// assigned monotonically starting at 1. Uniqueness checks run under the
/// write lock, so concurrent colliding inserts resolve to exactly one
/// success - the same guarantee the database constraint gives the
/// persistent implementation.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    inner: Arc<RwLock<Store>>,
}

#[derive(Debug, Default)]
struct Store {
    users: BTreeMap<i64, User>,
    next_id: i64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store {
    fn taken(&self, username: &str, email: &str, skip_id: Option<i64>) -> Option<&User> {
        self.users
            .values()
            .filter(|u| Some(u.id()) != skip_id)
            .find(|u| u.username() == username || u.email() == email)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: i64) -> Result<Option<User>, DomainError> {
        let store = self.inner.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let store = self.inner.read().await;
        Ok(store.users.values().find(|u| u.email() == email).cloned())
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, DomainError> {
        let store = self.inner.read().await;
        Ok(store.taken(username, email, None).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, DomainError> {
        let mut store = self.inner.write().await;

        if let Some(existing) = store.taken(&user.username, &user.email, None) {
            let message = if existing.username() == user.username {
                "Username already exists"
            } else {
                "Email already exists"
            };
            return Err(DomainError::conflict(message));
        }

        store.next_id += 1;
        let id = store.next_id;

        let user = User::new(id, user.username, user.email, user.password_hash);
        store.users.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, id: i64, update: UserUpdate) -> Result<User, DomainError> {
        let mut store = self.inner.write().await;

        if !store.users.contains_key(&id) {
            return Err(DomainError::not_found("User not found"));
        }

        if store
            .taken(&update.username, &update.email, Some(id))
            .is_some()
        {
            return Err(DomainError::conflict("Username or Email already exists"));
        }

        let Some(user) = store.users.get_mut(&id) else {
            return Err(DomainError::not_found("User not found"));
        };
        user.apply_update(update);

        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut store = self.inner.write().await;

        if store.users.remove(&id).is_none() {
            return Err(DomainError::not_found("User not found"));
        }

        Ok(())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, DomainError> {
        let store = self.inner.read().await;

        let limit = limit.max(0) as usize;
        let offset = offset.max(0) as usize;

        Ok(store
            .users
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    fn update(username: &str, email: &str) -> UserUpdate {
        UserUpdate {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "hash2".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_monotonic_ids() {
        let repo = InMemoryUserRepository::new();

        let alice = repo.insert(new_user("alice", "a@x.com")).await.unwrap();
        let bob = repo.insert(new_user("bob", "b@x.com")).await.unwrap();

        assert_eq!(alice.id(), 1);
        assert_eq!(bob.id(), 2);
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let repo = InMemoryUserRepository::new();

        let created = repo.insert(new_user("alice", "a@x.com")).await.unwrap();

        let fetched = repo.get(created.id()).await.unwrap().unwrap();
        assert_eq!(fetched, created);

        assert!(repo.get(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_by_email() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("alice", "a@x.com")).await.unwrap();

        let found = repo.get_by_email("a@x.com").await.unwrap();
        assert_eq!(found.unwrap().username(), "alice");

        assert!(repo.get_by_email("missing@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_username_or_email() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("alice", "a@x.com")).await.unwrap();

        let by_username = repo
            .find_by_username_or_email("alice", "other@x.com")
            .await
            .unwrap();
        assert!(by_username.is_some());

        let by_email = repo
            .find_by_username_or_email("other", "a@x.com")
            .await
            .unwrap();
        assert!(by_email.is_some());

        let neither = repo
            .find_by_username_or_email("other", "other@x.com")
            .await
            .unwrap();
        assert!(neither.is_none());
    }

    #[tokio::test]
    async fn test_insert_duplicate_username_conflicts() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("alice", "a@x.com")).await.unwrap();

        let err = repo
            .insert(new_user("alice", "other@x.com"))
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_insert_duplicate_email_conflicts() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("alice", "a@x.com")).await.unwrap();

        let err = repo.insert(new_user("bob", "a@x.com")).await.unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = InMemoryUserRepository::new();
        let created = repo.insert(new_user("alice", "a@x.com")).await.unwrap();

        let updated = repo
            .update(created.id(), update("alice2", "a2@x.com"))
            .await
            .unwrap();

        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.username(), "alice2");
        assert_eq!(updated.email(), "a2@x.com");
        assert_eq!(updated.password_hash(), "hash2");
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repo = InMemoryUserRepository::new();

        let err = repo.update(1, update("alice", "a@x.com")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_collision_conflicts() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("alice", "a@x.com")).await.unwrap();
        let bob = repo.insert(new_user("bob", "b@x.com")).await.unwrap();

        let err = repo
            .update(bob.id(), update("alice", "b@x.com"))
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_update_keeping_own_fields_is_not_a_conflict() {
        let repo = InMemoryUserRepository::new();
        let alice = repo.insert(new_user("alice", "a@x.com")).await.unwrap();

        let updated = repo
            .update(alice.id(), update("alice", "a@x.com"))
            .await
            .unwrap();
        assert_eq!(updated.username(), "alice");
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryUserRepository::new();
        let created = repo.insert(new_user("alice", "a@x.com")).await.unwrap();

        repo.delete(created.id()).await.unwrap();
        assert!(repo.get(created.id()).await.unwrap().is_none());

        let err = repo.delete(created.id()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_pages_in_id_order() {
        let repo = InMemoryUserRepository::new();
        for i in 0..5 {
            repo.insert(new_user(&format!("user{}", i), &format!("u{}@x.com", i)))
                .await
                .unwrap();
        }

        let page = repo.list(2, 0).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].username(), "user0");
        assert_eq!(page[1].username(), "user1");

        let second = repo.list(2, 2).await.unwrap();
        assert_eq!(second[0].username(), "user2");

        assert!(repo.list(10, 5).await.unwrap().is_empty());
        assert!(repo.list(0, 0).await.unwrap().is_empty());
    }
}
