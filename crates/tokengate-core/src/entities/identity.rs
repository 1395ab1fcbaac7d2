//! Identity entity - a registered user and its password reference

use std::fmt;

use crate::value_objects::UserId;

/// Identity record: a username bound to a one-way password hash.
///
/// Records are built once at startup and never mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: UserId,
    pub username: String,
    /// PHC-formatted password hash
    pub password_hash: String,
}

impl Identity {
    /// Create a new identity from an already hashed password
    pub fn new(id: UserId, username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}

// Keeps the hash out of logs.
impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
