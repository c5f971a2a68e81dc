//! Application state - Dependency injection container.
//!
//! Services are built once at startup and shared across concurrent
//! request handling; all mutability lives behind the repository lock.

use std::sync::Arc;

use crate::infra::InMemoryUserRepository;
use crate::services::{Calculator, UserManager, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Stateless calculator
    pub calculator: Calculator,
}

impl AppState {
    /// Wire the default in-memory stack.
    pub fn new() -> Self {
        let repo = Arc::new(InMemoryUserRepository::new());
        Self::with_user_service(Arc::new(UserManager::new(repo)))
    }

    /// Create application state with a manually injected user service
    /// (tests, alternate storage backends).
    pub fn with_user_service(user_service: Arc<dyn UserService>) -> Self {
        Self {
            user_service,
            calculator: Calculator::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
