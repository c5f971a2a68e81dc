//! Calculator handlers - arithmetic over two numeric path parameters.

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::errors::{AppError, AppResult};
use crate::services::Op;
use crate::types::ApiResponse;

/// Calculation result payload
#[derive(Debug, Serialize, ToSchema)]
pub struct CalcResponse {
    /// Operation result
    #[schema(example = 8.0)]
    pub result: f64,
}

/// Create calculator routes
pub fn calculator_routes() -> Router<AppState> {
    Router::new()
        .route("/add/:a/:b", get(add))
        .route("/subtract/:a/:b", get(subtract))
        .route("/multiply/:a/:b", get(multiply))
        .route("/divide/:a/:b", get(divide))
        .route("/power/:a/:b", get(power))
}

fn parse_operands(a: &str, b: &str) -> AppResult<(f64, f64)> {
    let a = a
        .parse::<f64>()
        .map_err(|e| AppError::bad_request(format!("invalid number {a:?}: {e}")))?;
    let b = b
        .parse::<f64>()
        .map_err(|e| AppError::bad_request(format!("invalid number {b:?}: {e}")))?;

    Ok((a, b))
}

async fn run(state: &AppState, op: Op, a: String, b: String) -> AppResult<ApiResponse<CalcResponse>> {
    let (a, b) = parse_operands(&a, &b)?;
    let result = state.calculator.calculate(op, a, b)?;

    Ok(ApiResponse::new(CalcResponse { result }))
}

/// Add two numbers
#[utoipa::path(
    get,
    path = "/add/{a}/{b}",
    tag = "Calculator",
    params(
        ("a" = f64, Path, description = "First number"),
        ("b" = f64, Path, description = "Second number")
    ),
    responses(
        (status = 200, description = "Sum of a and b", body = CalcResponse),
        (status = 400, description = "Invalid number")
    )
)]
pub async fn add(
    State(state): State<AppState>,
    Path((a, b)): Path<(String, String)>,
) -> AppResult<ApiResponse<CalcResponse>> {
    run(&state, Op::Add, a, b).await
}

/// Subtract two numbers (a - b)
#[utoipa::path(
    get,
    path = "/subtract/{a}/{b}",
    tag = "Calculator",
    params(
        ("a" = f64, Path, description = "Minuend"),
        ("b" = f64, Path, description = "Subtrahend")
    ),
    responses(
        (status = 200, description = "Difference of a and b", body = CalcResponse),
        (status = 400, description = "Invalid number")
    )
)]
pub async fn subtract(
    State(state): State<AppState>,
    Path((a, b)): Path<(String, String)>,
) -> AppResult<ApiResponse<CalcResponse>> {
    run(&state, Op::Subtract, a, b).await
}

/// Multiply two numbers
#[utoipa::path(
    get,
    path = "/multiply/{a}/{b}",
    tag = "Calculator",
    params(
        ("a" = f64, Path, description = "First number"),
        ("b" = f64, Path, description = "Second number")
    ),
    responses(
        (status = 200, description = "Product of a and b", body = CalcResponse),
        (status = 400, description = "Invalid number")
    )
)]
pub async fn multiply(
    State(state): State<AppState>,
    Path((a, b)): Path<(String, String)>,
) -> AppResult<ApiResponse<CalcResponse>> {
    run(&state, Op::Multiply, a, b).await
}

/// Divide two numbers (a / b)
#[utoipa::path(
    get,
    path = "/divide/{a}/{b}",
    tag = "Calculator",
    params(
        ("a" = f64, Path, description = "Dividend"),
        ("b" = f64, Path, description = "Divisor (cannot be zero)")
    ),
    responses(
        (status = 200, description = "Quotient of a and b", body = CalcResponse),
        (status = 400, description = "Invalid number or division by zero")
    )
)]
pub async fn divide(
    State(state): State<AppState>,
    Path((a, b)): Path<(String, String)>,
) -> AppResult<ApiResponse<CalcResponse>> {
    run(&state, Op::Divide, a, b).await
}

/// Raise a to the power of b
#[utoipa::path(
    get,
    path = "/power/{a}/{b}",
    tag = "Calculator",
    params(
        ("a" = f64, Path, description = "Base"),
        ("b" = f64, Path, description = "Exponent (non-negative)")
    ),
    responses(
        (status = 200, description = "a raised to b", body = CalcResponse),
        (status = 400, description = "Invalid number or negative exponent")
    )
)]
pub async fn power(
    State(state): State<AppState>,
    Path((a, b)): Path<(String, String)>,
) -> AppResult<ApiResponse<CalcResponse>> {
    run(&state, Op::Power, a, b).await
}
