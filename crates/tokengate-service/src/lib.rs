//! # tokengate-service
//!
//! Application layer: credential verification, token issuance and validation,
//! the in-memory identity store, and the DTOs exchanged with the API layer.

pub mod dto;
pub mod services;
pub mod store;

pub use dto::{HealthResponse, LoginRequest, LoginResponse, ProtectedDataResponse};
pub use services::{AuthService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};
pub use store::{default_seed, InMemoryIdentityRepository, SeedIdentity};
