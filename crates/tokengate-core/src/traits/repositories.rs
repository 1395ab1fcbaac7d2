//! Repository traits (ports) - define the interface for identity lookup
//!
//! The credential verifier only needs to read identities, so that is all the
//! trait exposes. The in-memory store in `tokengate-service` implements it; a
//! database-backed store can replace it without touching the verifier.

use async_trait::async_trait;

use crate::entities::Identity;
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Find an identity by exact username match
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Identity>>;
}
