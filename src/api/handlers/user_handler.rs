//! User CRUD handlers.

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

use crate::api::extractors::ApiJson;
use crate::api::AppState;
use crate::domain::{CreateUserRequest, UpdateUserRequest, User};
use crate::errors::{AppError, AppResult};
use crate::types::{ApiResponse, Created, NoContent};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// The id arrives as a raw path segment so that non-numeric values get
/// the enveloped "invalid user ID" response rather than axum's default
/// plain-text rejection.
fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>().map_err(|_| AppError::InvalidId)
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users, ordered by id", body = [User])
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<User>>> {
    let users = state.user_service.list_users().await?;

    Ok(ApiResponse::new(users))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<User>> {
    let id = parse_id(&id)?;
    let user = state.user_service.get_user(id).await?;

    Ok(ApiResponse::new(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> AppResult<Created<User>> {
    let user = state
        .user_service
        .create_user(payload.name, payload.email)
        .await?;

    Ok(Created(user))
}

/// Update an existing user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Invalid user ID or validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateUserRequest>,
) -> AppResult<ApiResponse<User>> {
    let id = parse_id(&id)?;
    let user = state
        .user_service
        .update_user(id, payload.name, payload.email)
        .await?;

    Ok(ApiResponse::new(user))
}

/// Delete a user by id
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<NoContent> {
    let id = parse_id(&id)?;
    state.user_service.delete_user(id).await?;

    Ok(NoContent)
}
