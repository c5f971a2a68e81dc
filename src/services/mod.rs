//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

pub mod calculator;
pub mod greeting;
mod user_service;

pub use calculator::{Calculator, Op};
pub use user_service::{UserManager, UserService};
