//! In-memory identity repository
//!
//! Built once at startup and read-only afterwards, so it is shared through an
//! `Arc` without any locking.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokengate_common::AppResult;
use tokengate_core::{DomainError, Identity, IdentityRepository, RepoResult, UserId};
use tracing::info;

use super::seed::SeedIdentity;

/// Read-only identity store keyed by username
#[derive(Debug, Default)]
pub struct InMemoryIdentityRepository {
    by_username: HashMap<String, Identity>,
    ids: HashSet<UserId>,
}

impl InMemoryIdentityRepository {
    /// Build a store from identity records
    ///
    /// # Errors
    /// Fails on an empty username or when a username or id appears twice
    pub fn from_identities(
        identities: impl IntoIterator<Item = Identity>,
    ) -> Result<Self, DomainError> {
        let mut store = Self::default();

        for identity in identities {
            if identity.username.is_empty() {
                return Err(DomainError::InvalidUsername(identity.username));
            }
            if store.by_username.contains_key(&identity.username) {
                return Err(DomainError::DuplicateUsername(identity.username));
            }
            if !store.ids.insert(identity.id) {
                return Err(DomainError::DuplicateId(identity.id));
            }

            store.by_username.insert(identity.username.clone(), identity);
        }

        Ok(store)
    }

    /// Hash every seed password and build the store
    pub fn from_seed(seed: impl IntoIterator<Item = SeedIdentity>) -> AppResult<Self> {
        let identities = seed
            .into_iter()
            .map(SeedIdentity::into_identity)
            .collect::<AppResult<Vec<_>>>()?;

        let store = Self::from_identities(identities)?;
        info!(identities = store.len(), "Identity store loaded");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.by_username.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_username.is_empty()
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Identity>> {
        Ok(self.by_username.get(username).cloned())
    }
}
