//! User service - Handles user-related business logic.
//!
//! Validates every operation before delegating to the repository and
//! owns the entity's timestamps.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{email, User};
use crate::errors::{AppError, AppResult};
use crate::infra::{RepoError, UserRepository};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get a user by id
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// List all users, ordered by id
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Validate and persist a new user
    async fn create_user(&self, name: String, email: String) -> AppResult<User>;

    /// Partially update an existing user. An empty `name` or `email`
    /// keeps the stored value; `updated_at` is refreshed either way.
    async fn update_user(&self, id: i64, name: String, email: String) -> AppResult<User>;

    /// Delete a user by id
    async fn delete_user(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserService backed by a repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create a new user service instance
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

/// NotFound surfaces untouched so the HTTP layer can map it to 404;
/// everything else is wrapped with the failing operation's name.
fn repo_err(operation: &'static str) -> impl FnOnce(RepoError) -> AppError {
    move |e| match e {
        RepoError::NotFound => AppError::NotFound,
        other => AppError::repository(operation, other),
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: i64) -> AppResult<User> {
        if id <= 0 {
            return Err(AppError::InvalidId);
        }

        self.repo.get_by_id(id).await.map_err(repo_err("get user"))
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await.map_err(repo_err("list users"))
    }

    async fn create_user(&self, name: String, email_addr: String) -> AppResult<User> {
        if name.is_empty() {
            return Err(AppError::MissingName);
        }
        if email_addr.is_empty() {
            return Err(AppError::MissingEmail);
        }
        if !email::is_valid_email(&email_addr) {
            return Err(AppError::InvalidEmailFormat);
        }

        let user = User::new(name, email_addr);
        self.repo.create(user).await.map_err(repo_err("create user"))
    }

    async fn update_user(&self, id: i64, name: String, email_addr: String) -> AppResult<User> {
        if id <= 0 {
            return Err(AppError::InvalidId);
        }

        let mut user = self.repo.get_by_id(id).await.map_err(repo_err("get user"))?;

        if !email_addr.is_empty() && !email::is_valid_email(&email_addr) {
            return Err(AppError::InvalidEmailFormat);
        }

        if !name.is_empty() {
            user.name = name;
        }
        if !email_addr.is_empty() {
            user.email = email_addr;
        }
        user.updated_at = Utc::now();

        self.repo.update(user).await.map_err(repo_err("update user"))
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        if id <= 0 {
            return Err(AppError::InvalidId);
        }

        self.repo.delete(id).await.map_err(repo_err("delete user"))
    }
}
