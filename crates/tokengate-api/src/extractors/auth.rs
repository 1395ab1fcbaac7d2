//! Authentication extractor
//!
//! Reads the token from the `Authorization` header and validates it. The header
//! carries the token itself; a leading `Bearer ` scheme is tolerated and
//! stripped.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, HeaderName, HeaderValue},
};
use axum_extra::{
    headers::{self, Header},
    typed_header::TypedHeaderRejectionReason,
    TypedHeader,
};
use tokengate_common::AppError;
use tokengate_core::UserId;
use tokengate_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Raw token taken from the `Authorization` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_header_value(raw: &str) -> Self {
        let raw = raw.trim();

        let token = match raw.get(..6) {
            Some(scheme) if scheme.eq_ignore_ascii_case("bearer") => {
                let rest = &raw[6..];
                if rest.is_empty() || rest.starts_with(' ') {
                    rest.trim_start()
                } else {
                    raw
                }
            }
            _ => raw,
        };

        Self(token.to_string())
    }
}

impl Header for AuthToken {
    fn name() -> &'static HeaderName {
        &header::AUTHORIZATION
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values.next().ok_or_else(headers::Error::invalid)?;
        let raw = value.to_str().map_err(|_| headers::Error::invalid())?;
        Ok(Self::from_header_value(raw))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        if let Ok(value) = HeaderValue::from_str(&self.0) {
            values.extend(std::iter::once(value));
        }
    }
}

/// Identity extracted from a valid token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: UserId,
    pub username: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = match TypedHeader::<AuthToken>::from_request_parts(parts, state).await {
            Ok(TypedHeader(token)) => token,
            Err(rejection) => {
                return Err(match rejection.reason() {
                    TypedHeaderRejectionReason::Missing => AppError::MissingToken.into(),
                    _ => {
                        tracing::warn!(error = %rejection, "Unreadable authorization header");
                        AppError::InvalidToken.into()
                    }
                });
            }
        };

        let app_state = AppState::from_ref(state);
        let claims = AuthService::new(app_state.service_context()).authenticate(token.as_str())?;

        Ok(AuthUser {
            user_id: claims.user_id(),
            username: claims.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_token() {
        assert_eq!(AuthToken::from_header_value("abc.def.ghi").as_str(), "abc.def.ghi");
        assert_eq!(AuthToken::from_header_value("  abc.def.ghi ").as_str(), "abc.def.ghi");
    }

    #[test]
    fn test_bearer_prefix_stripped() {
        assert_eq!(AuthToken::from_header_value("Bearer abc.def").as_str(), "abc.def");
        assert_eq!(AuthToken::from_header_value("bearer   abc.def").as_str(), "abc.def");
        assert_eq!(AuthToken::from_header_value("Bearer").as_str(), "");
    }

    #[test]
    fn test_bearer_like_token_kept() {
        assert_eq!(AuthToken::from_header_value("Bearerish").as_str(), "Bearerish");
    }

    #[test]
    fn test_empty_header() {
        assert_eq!(AuthToken::from_header_value("").as_str(), "");
    }

    #[test]
    fn test_decode_from_header_values() {
        let value = HeaderValue::from_static("Bearer xyz");
        let token = AuthToken::decode(&mut std::iter::once(&value)).unwrap();
        assert_eq!(token.as_str(), "xyz");

        let mut none = std::iter::empty::<&HeaderValue>();
        assert!(AuthToken::decode(&mut none).is_err());
    }
}
