//! Seed identities loaded at process start

use tokengate_common::{hash_password, AppResult};
use tokengate_core::{Identity, UserId};

/// An identity declared with a plaintext password, hashed when loaded
#[derive(Clone)]
pub struct SeedIdentity {
    pub id: UserId,
    pub username: String,
    pub password: String,
}

impl SeedIdentity {
    pub fn new(id: i64, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: UserId::new(id),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Hash the password and produce the stored identity record
    pub fn into_identity(self) -> AppResult<Identity> {
        let password_hash = hash_password(&self.password)?;
        Ok(Identity::new(self.id, self.username, password_hash))
    }
}

impl std::fmt::Debug for SeedIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedIdentity")
            .field("id", &self.id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// The single built-in account
pub fn default_seed() -> Vec<SeedIdentity> {
    vec![SeedIdentity::new(1, "user1", "password123")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokengate_common::verify_password;

    #[test]
    fn test_default_seed() {
        let seed = default_seed();
        assert_eq!(seed.len(), 1);
        assert_eq!(seed[0].id, UserId::new(1));
        assert_eq!(seed[0].username, "user1");
    }

    #[test]
    fn test_into_identity_hashes_password() {
        let identity = SeedIdentity::new(7, "alice", "hunter2").into_identity().unwrap();

        assert_eq!(identity.id, UserId::new(7));
        assert_eq!(identity.username, "alice");
        assert_ne!(identity.password_hash, "hunter2");
        assert!(verify_password("hunter2", &identity.password_hash).unwrap());
    }
}
