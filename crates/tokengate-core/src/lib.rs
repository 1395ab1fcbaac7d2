//! # tokengate-core
//!
//! Domain layer containing the identity record, its id type, and the lookup trait
//! the credential verifier depends on. No infrastructure dependencies live here.

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::Identity;
pub use error::DomainError;
pub use traits::{IdentityRepository, RepoResult};
pub use value_objects::UserId;
