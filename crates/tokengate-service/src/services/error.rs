//! Service layer error types

use std::fmt;
use tokengate_common::AppError;
use tokengate_core::DomainError;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation or storage failure
    Domain(DomainError),

    /// Application error (credentials, tokens, ...)
    App(AppError),

    /// Missing dependency or other setup problem
    Configuration(String),

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::Configuration(msg) => write!(f, "Configuration error: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => AppError::status_code_for_domain(e),
            Self::App(e) => e.status_code(),
            Self::Configuration(_) | Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Configuration(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this wraps the given application error kind
    pub fn is_app(&self, predicate: impl FnOnce(&AppError) -> bool) -> bool {
        if let Self::App(e) = self {
            predicate(e)
        } else {
            false
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::Configuration(msg) => AppError::Config(msg),
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tokengate_core::UserId;

    #[test]
    fn test_app_error_passthrough() {
        let err = ServiceError::from(AppError::InvalidCredentials);
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.error_code(), "INVALID_CREDENTIALS");
        assert_eq!(err.to_string(), "invalid credentials");
        assert!(err.is_app(|e| matches!(e, AppError::InvalidCredentials)));
    }

    #[test]
    fn test_domain_error() {
        let err = ServiceError::from(DomainError::DuplicateId(UserId::new(3)));
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "DUPLICATE_ID");
    }

    #[test]
    fn test_configuration_error() {
        let err = ServiceError::configuration("token_service is required");
        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("token_service is required"));
    }

    #[test]
    fn test_convert_to_app_error() {
        let app_err: AppError = ServiceError::internal("boom").into();
        assert_eq!(app_err.status_code(), 500);

        let app_err: AppError = ServiceError::from(AppError::MissingToken).into();
        assert!(matches!(app_err, AppError::MissingToken));
    }
}
