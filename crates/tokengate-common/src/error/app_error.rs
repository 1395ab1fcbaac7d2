//! Application error types
//!
//! Unified error handling for the entire application. The Display text of the
//! authentication variants is the message clients see, so it is kept short and
//! identical for every way a token can fail.

use serde::Serialize;
use tokengate_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("no token")]
    MissingToken,

    #[error("failed to authenticate")]
    InvalidToken,

    #[error("failed to authenticate")]
    TokenExpired,

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 401 Unauthorized
            Self::InvalidCredentials => 401,

            // 403 Forbidden: the protected route answers a missing token this way
            Self::MissingToken => 403,

            // 500 Internal Server Error, including tokens that fail to verify
            Self::InvalidToken | Self::TokenExpired | Self::Internal(_) | Self::Config(_) => 500,

            Self::Domain(e) => Self::status_code_for_domain(e),
        }
    }

    /// Map a domain error to an HTTP status code
    #[must_use]
    pub fn status_code_for_domain(err: &DomainError) -> u16 {
        if err.is_validation() {
            400
        } else if err.is_conflict() {
            409
        } else {
            500
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::MissingToken => "MISSING_TOKEN",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
