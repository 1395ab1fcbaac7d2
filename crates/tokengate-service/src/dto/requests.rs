//! Request DTOs for API endpoints

use serde::Deserialize;
use validator::Validate;

/// Login request
///
/// Only upper bounds are enforced: an empty or unknown username is an
/// ordinary credential failure, not a malformed request.
#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(max = 64, message = "Username must be at most 64 characters"))]
    pub username: String,

    #[validate(length(max = 1024, message = "Password must be at most 1024 characters"))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
