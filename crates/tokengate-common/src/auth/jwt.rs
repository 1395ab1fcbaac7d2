//! JWT utilities for authentication
//!
//! Issues and validates HS256 access tokens using the `jsonwebtoken` crate.
//! A token validates only when its signature matches the configured secret and
//! its `exp` has not passed. Expiry is checked with zero leeway.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tokengate_core::{Identity, UserId};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity id
    pub id: UserId,
    /// Username at issuance time
    pub username: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the identity id carried by the token
    pub fn user_id(&self) -> UserId {
        self.id
    }
}

/// Token issuer and validator bound to a single signing secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_expiry: i64,
}

impl TokenService {
    /// Default token lifetime: one hour
    pub const DEFAULT_EXPIRY_SECS: i64 = 3600;

    /// Create a new token service with the given secret and expiry in seconds
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            token_expiry,
        }
    }

    /// Token lifetime in seconds
    pub fn token_expiry(&self) -> i64 {
        self.token_expiry
    }

    /// Issue a token for a verified identity
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, identity: &Identity) -> Result<String, AppError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue a token as if it had been signed at `issued_at`
    ///
    /// # Errors
    /// Returns an error if the expiry falls outside the representable time
    /// range or token encoding fails
    pub fn issue_at(
        &self,
        identity: &Identity,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let exp = TimeDelta::try_seconds(self.token_expiry)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::Internal(anyhow::anyhow!(
                    "Token expiry of {}s is out of range",
                    self.token_expiry
                ))
            })?;

        let claims = Claims {
            id: identity.id,
            username: identity.username.clone(),
            iat: issued_at.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode JWT: {e}")))
    }

    /// Decode and validate a token
    ///
    /// # Errors
    /// Returns `TokenExpired` for a correctly signed token past its expiry, and
    /// `InvalidToken` for anything else that fails to verify.
    pub fn validate(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    _ => AppError::InvalidToken,
                }
            })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}
