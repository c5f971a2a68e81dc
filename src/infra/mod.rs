//! Infrastructure layer - External systems integration
//!
//! This module holds the storage backends behind the repository
//! abstraction used by the service layer.

pub mod repositories;

pub use repositories::{InMemoryUserRepository, RepoError, RepoResult, UserRepository};
