//! Response DTOs for API endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokengate_core::UserId;

/// Successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

impl LoginResponse {
    pub fn new(token: String) -> Self {
        Self { token }
    }
}

/// Body of the protected resource
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectedDataResponse {
    pub message: String,
    pub user_id: UserId,
}

impl ProtectedDataResponse {
    pub const MESSAGE: &'static str = "This is protected data";

    pub fn for_user(user_id: UserId) -> Self {
        Self {
            message: Self::MESSAGE.to_string(),
            user_id,
        }
    }
}

/// Liveness probe response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}
