//! Authentication service
//!
//! Verifies credentials against the identity store, issues tokens for verified
//! identities, and authenticates tokens presented on later requests.

use tokengate_common::{verify_password, AppError, Claims};
use tokengate_core::Identity;
use tracing::{debug, info, instrument, warn};

use crate::dto::{LoginRequest, LoginResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Look up the identity by exact username and check the password.
    ///
    /// Unknown usernames and wrong passwords both yield `InvalidCredentials`.
    #[instrument(skip(self, password))]
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> ServiceResult<Identity> {
        let Some(identity) = self.ctx.identity_repo().find_by_username(username).await? else {
            warn!("Login failed: unknown username");
            return Err(AppError::InvalidCredentials.into());
        };

        let is_valid = verify_password(password, &identity.password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %identity.id, "Login failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        Ok(identity)
    }

    /// Verify credentials and issue a token
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let identity = self
            .verify_credentials(&request.username, &request.password)
            .await?;

        let token = self.ctx.token_service().issue(&identity)?;

        info!(user_id = %identity.id, "User logged in successfully");

        Ok(LoginResponse::new(token))
    }

    /// Authenticate a presented token and return its claims
    #[instrument(skip(self, token))]
    pub fn authenticate(&self, token: &str) -> ServiceResult<Claims> {
        if token.is_empty() {
            return Err(AppError::MissingToken.into());
        }

        let claims = self.ctx.token_service().validate(token).map_err(|e| {
            warn!(reason = e.error_code(), "Token rejected");
            ServiceError::from(e)
        })?;

        debug!(user_id = %claims.user_id(), "Token accepted");
        Ok(claims)
    }
}
