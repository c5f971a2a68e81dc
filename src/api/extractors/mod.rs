//! Custom axum extractors.

mod json;

pub use json::ApiJson;
