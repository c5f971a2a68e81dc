//! Greeting handlers.

use axum::{extract::Path, routing::get, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::errors::{AppError, AppResult};
use crate::services::greeting;
use crate::types::ApiResponse;

/// Greeting message payload
#[derive(Debug, Serialize, ToSchema)]
pub struct GreetingResponse {
    /// Greeting message
    #[schema(example = "Hello, John!")]
    pub message: String,
}

/// Create greeting routes
pub fn greeting_routes() -> Router<AppState> {
    Router::new()
        .route("/:name", get(hello))
        .route("/formal/:name", get(formal_greeting))
}

/// Greet a person
#[utoipa::path(
    get,
    path = "/greeting/{name}",
    tag = "Greeting",
    params(
        ("name" = String, Path, description = "Person's name")
    ),
    responses(
        (status = 200, description = "Greeting message", body = GreetingResponse),
        (status = 400, description = "Missing name")
    )
)]
pub async fn hello(Path(name): Path<String>) -> AppResult<ApiResponse<GreetingResponse>> {
    if name.is_empty() {
        return Err(AppError::bad_request("name is required"));
    }

    Ok(ApiResponse::new(GreetingResponse {
        message: greeting::hello(&name),
    }))
}

/// Formal greeting
#[utoipa::path(
    get,
    path = "/greeting/formal/{name}",
    tag = "Greeting",
    params(
        ("name" = String, Path, description = "Person's name")
    ),
    responses(
        (status = 200, description = "Formal greeting message", body = GreetingResponse),
        (status = 400, description = "Missing name")
    )
)]
pub async fn formal_greeting(Path(name): Path<String>) -> AppResult<ApiResponse<GreetingResponse>> {
    if name.is_empty() {
        return Err(AppError::bad_request("name is required"));
    }

    Ok(ApiResponse::new(GreetingResponse {
        message: greeting::formal(&name),
    }))
}
