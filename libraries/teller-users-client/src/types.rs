//! Types for users API requests and responses.
//!
//! Each remote endpoint gets its own DTO even where the fields coincide;
//! the wire contracts are independent and may drift independently. Ids are
//! `i32` on the wire and widened to `i64` in the domain model.

use serde::{Deserialize, Serialize};

/// Configuration for connecting to a users API server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server (e.g., "https://api.example.com")
    pub url: String,
}

impl ClientConfig {
    /// Create a new client config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

// =============================================================================
// Read DTOs
// =============================================================================

/// One element of the `GET /users` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserListItem {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Response body of `GET /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserDetail {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub email: String,
}

// =============================================================================
// Write DTOs
// =============================================================================

/// Request body for `POST /users` and `PUT /users/{id}`.
///
/// Carries no id; the server is authoritative for identifier assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWriteRequest {
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Response body of the create/update/delete endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserWriteResponse {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_request_serializes_without_id() {
        let request = UserWriteRequest {
            name: "Test 01".to_string(),
            username: "test01user".to_string(),
            email: "test01user@mail.com".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["name"], "Test 01");
        assert_eq!(value["username"], "test01user");
        assert_eq!(value["email"], "test01user@mail.com");
    }

    #[test]
    fn list_item_deserializes() {
        let item: UserListItem = serde_json::from_str(
            r#"{"id":1,"name":"Test 01","username":"test01user","email":"test01user@mail.com"}"#,
        )
        .unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.name, "Test 01");
    }
}
