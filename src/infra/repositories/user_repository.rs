//! User repository trait and its in-memory implementation.

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::domain::User;

/// Errors surfaced by user storage backends.
#[derive(Error, Debug)]
pub enum RepoError {
    #[error("user not found")]
    NotFound,

    /// Backend-specific failure (connection loss, corrupted record, ...).
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result type alias for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Storage contract for user records.
///
/// The service layer depends on this trait only; swapping the in-memory
/// store for a real backend means implementing it elsewhere and wiring
/// the new type into [`crate::api::AppState`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by id, `NotFound` if absent
    async fn get_by_id(&self, id: i64) -> RepoResult<User>;

    /// All users, ordered by id
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Store a new record, assigning the next sequential id.
    /// Any id already set on the incoming record is ignored.
    async fn create(&self, user: User) -> RepoResult<User>;

    /// Overwrite the stored record with the same id, `NotFound` if absent
    async fn update(&self, user: User) -> RepoResult<User>;

    /// Remove a record by id, `NotFound` if absent
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

/// Map plus id counter behind a single lock, so that an id is never
/// handed out twice even under concurrent creates.
struct Store {
    users: BTreeMap<i64, User>,
    next_id: i64,
}

/// In-memory user repository.
///
/// Guarded by an `RwLock` so the store can be shared across concurrent
/// request handlers. Ids are sequential starting at 1 and are never
/// reused after deletion.
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

impl InMemoryUserRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                users: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_id(&self, id: i64) -> RepoResult<User> {
        let store = self.store.read().await;
        store.users.get(&id).cloned().ok_or(RepoError::NotFound)
    }

    async fn list(&self) -> RepoResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn create(&self, mut user: User) -> RepoResult<User> {
        let mut store = self.store.write().await;
        user.id = store.next_id;
        store.next_id += 1;
        store.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> RepoResult<User> {
        let mut store = self.store.write().await;
        if !store.users.contains_key(&user.id) {
            return Err(RepoError::NotFound);
        }
        store.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut store = self.store.write().await;
        store.users.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(name: &str, email: &str) -> User {
        User::new(name.to_string(), email.to_string())
    }

    #[tokio::test]
    async fn full_crud_cycle() {
        let repo = InMemoryUserRepository::new();

        let created = repo
            .create(sample_user("John Doe", "john@example.com"))
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let retrieved = repo.get_by_id(1).await.unwrap();
        assert_eq!(retrieved, created);

        let mut changed = retrieved;
        changed.name = "Jane Doe".to_string();
        repo.update(changed).await.unwrap();
        assert_eq!(repo.get_by_id(1).await.unwrap().name, "Jane Doe");

        repo.delete(1).await.unwrap();
        assert!(matches!(repo.get_by_id(1).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn missing_ids_report_not_found() {
        let repo = InMemoryUserRepository::new();

        assert!(matches!(repo.get_by_id(999).await, Err(RepoError::NotFound)));
        assert!(matches!(repo.delete(999).await, Err(RepoError::NotFound)));

        let mut ghost = sample_user("Ghost", "ghost@example.com");
        ghost.id = 999;
        assert!(matches!(repo.update(ghost).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn ids_are_sequential_and_never_reused() {
        let repo = InMemoryUserRepository::new();

        let first = repo
            .create(sample_user("One", "one@example.com"))
            .await
            .unwrap();
        let second = repo
            .create(sample_user("Two", "two@example.com"))
            .await
            .unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        repo.delete(2).await.unwrap();
        let third = repo
            .create(sample_user("Three", "three@example.com"))
            .await
            .unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn list_returns_users_in_id_order() {
        let repo = InMemoryUserRepository::new();
        for (name, email) in [("A", "a@x.co"), ("B", "b@x.co"), ("C", "c@x.co")] {
            repo.create(sample_user(name, email)).await.unwrap();
        }

        let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn incoming_id_is_ignored_on_create() {
        let repo = InMemoryUserRepository::new();

        let mut user = sample_user("John Doe", "john@example.com");
        user.id = 42;
        let created = repo.create(user).await.unwrap();
        assert_eq!(created.id, 1);
    }
}
