//! Service context - dependency container for services
//!
//! Holds the identity lookup capability and the token service. Both are
//! injected, so tests and alternative stores never touch globals.

use std::sync::Arc;

use tokengate_common::TokenService;
use tokengate_core::IdentityRepository;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    identity_repo: Arc<dyn IdentityRepository>,
    token_service: Arc<TokenService>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(
        identity_repo: Arc<dyn IdentityRepository>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            identity_repo,
            token_service,
        }
    }

    /// Get the identity repository
    pub fn identity_repo(&self) -> &dyn IdentityRepository {
        self.identity_repo.as_ref()
    }

    /// Get the token service
    pub fn token_service(&self) -> &TokenService {
        &self.token_service
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("identity_repo", &"IdentityRepository")
            .field("token_service", &self.token_service)
            .finish()
    }
}

/// Builder for ServiceContext
pub struct ServiceContextBuilder {
    identity_repo: Option<Arc<dyn IdentityRepository>>,
    token_service: Option<Arc<TokenService>>,
}

impl ServiceContextBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            identity_repo: None,
            token_service: None,
        }
    }

    /// Set the identity repository
    pub fn identity_repo(mut self, repo: Arc<dyn IdentityRepository>) -> Self {
        self.identity_repo = Some(repo);
        self
    }

    /// Set the token service
    pub fn token_service(mut self, service: Arc<TokenService>) -> Self {
        self.token_service = Some(service);
        self
    }

    /// Build the ServiceContext
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.identity_repo
                .ok_or_else(|| ServiceError::configuration("identity_repo is required"))?,
            self.token_service
                .ok_or_else(|| ServiceError::configuration("token_service is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
