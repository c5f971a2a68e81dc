//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::infra::RepoError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation
    #[error("invalid user ID")]
    InvalidId,

    #[error("name is required")]
    MissingName,

    #[error("email is required")]
    MissingEmail,

    #[error("invalid email format")]
    InvalidEmailFormat,

    #[error("{0}")]
    BadRequest(String),

    // Resource errors
    #[error("user not found")]
    NotFound,

    // Backing store errors, tagged with the operation that failed
    #[error("failed to {operation}")]
    Repository {
        operation: &'static str,
        #[source]
        source: RepoError,
    },

    // Internal
    #[error("internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Repository { operation, source } => {
                format!("failed to {operation}: {source}")
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {detail}");
                "internal server error".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn repository(operation: &'static str, source: RepoError) -> Self {
        AppError::Repository { operation, source }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
