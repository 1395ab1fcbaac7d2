//! Numeric identity id
//!
//! Serialized as a plain JSON number, which is what clients of the protected
//! endpoint read back as `userId`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric id of an identity record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Create a new UserId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&UserId::new(1)).unwrap();
        assert_eq!(json, "1");

        let id: UserId = serde_json::from_str("12").unwrap();
        assert_eq!(id, UserId::new(12));
    }

    #[test]
    fn test_display() {
        assert_eq!(UserId::new(99).to_string(), "99");
    }
}
