//! Test fixtures
//!
//! Request and response shapes as a client sees them, independent of the
//! server's own DTOs.

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// The built-in account
    pub fn seeded_user() -> Self {
        Self::new("user1", "password123")
    }
}

/// Successful login body
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Protected resource body
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProtectedData {
    pub message: String,
    pub user_id: i64,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: String,
}
