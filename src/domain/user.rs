//! User domain entity and request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, assigned by the repository
    #[schema(example = 1)]
    pub id: i64,
    /// Display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// Email address
    #[schema(example = "john@example.com")]
    pub email: String,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with both timestamps set to the same instant.
    /// The id stays zero until the repository assigns one.
    pub fn new(name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            email,
            created_at: now,
            updated_at: now,
        }
    }
}

/// User creation payload
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Display name
    #[serde(default)]
    #[schema(example = "John Doe")]
    pub name: String,
    /// Email address
    #[serde(default)]
    #[schema(example = "john@example.com")]
    pub email: String,
}

/// User update payload. An empty (or omitted) field keeps the stored value.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    /// New display name, empty to keep the current one
    #[serde(default)]
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// New email address, empty to keep the current one
    #[serde(default)]
    #[schema(example = "jane@example.com")]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_has_equal_timestamps() {
        let user = User::new("John Doe".to_string(), "john@example.com".to_string());

        assert_eq!(user.id, 0);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn update_request_fields_default_to_empty() {
        let req: UpdateUserRequest = serde_json::from_str("{}").unwrap();

        assert!(req.name.is_empty());
        assert!(req.email.is_empty());
    }
}
