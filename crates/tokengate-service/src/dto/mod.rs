//! Data transfer objects for API requests and responses

pub mod requests;
pub mod responses;

pub use requests::LoginRequest;
pub use responses::{HealthResponse, LoginResponse, ProtectedDataResponse};
