//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod user_repository;

pub use user_repository::{InMemoryUserRepository, RepoError, RepoResult, UserRepository};
