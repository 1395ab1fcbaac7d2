//! Business logic services

pub mod auth;
pub mod context;
pub mod error;

pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
