//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// Messages
// =============================================================================

/// Welcome message returned by the root endpoint
pub const WELCOME_MESSAGE: &str = "Welcome to the Rust API Template";
