//! Axum extractors for request handling
//!
//! Custom extractors for token authentication and validated JSON bodies.

mod auth;
mod validated;

pub use auth::{AuthToken, AuthUser};
pub use validated::ValidatedJson;
