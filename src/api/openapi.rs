//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{calculator_handler, greeting_handler, user_handler};
use crate::domain::{CreateUserRequest, UpdateUserRequest, User};

/// OpenAPI documentation for the Rust API Template
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rust API Template",
        version = "0.1.0",
        description = "Starter REST API with arithmetic, greeting, and in-memory user CRUD endpoints",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Calculator endpoints
        calculator_handler::add,
        calculator_handler::subtract,
        calculator_handler::multiply,
        calculator_handler::divide,
        calculator_handler::power,
        // Greeting endpoints
        greeting_handler::hello,
        greeting_handler::formal_greeting,
    ),
    components(
        schemas(
            User,
            CreateUserRequest,
            UpdateUserRequest,
            calculator_handler::CalcResponse,
            greeting_handler::GreetingResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management operations"),
        (name = "Calculator", description = "Basic arithmetic over path parameters"),
        (name = "Greeting", description = "Greeting message generation")
    )
)]
pub struct ApiDoc;
