//! Application route configuration.

use axum::{routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{calculator_routes, greeting_routes, user_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::WELCOME_MESSAGE;
use crate::types::ApiResponse;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Calculator routes live at the root (/add/{a}/{b}, ...)
        .merge(calculator_routes())
        .nest("/users", user_routes())
        .nest("/greeting", greeting_routes())
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Welcome endpoint
async fn root() -> ApiResponse<serde_json::Value> {
    ApiResponse::new(json!({ "message": WELCOME_MESSAGE }))
}

/// Health check endpoint
async fn health() -> ApiResponse<serde_json::Value> {
    ApiResponse::new(json!({ "status": "ok" }))
}
