//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::UserId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already registered: {0}")]
    DuplicateUsername(String),

    #[error("Identity id already registered: {0}")]
    DuplicateId(UserId),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::DuplicateUsername(_) => "DUPLICATE_USERNAME",
            Self::DuplicateId(_) => "DUPLICATE_ID",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidUsername(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateUsername(_) | Self::DuplicateId(_))
    }
}
