//! User Password Value Object
//!
//! Domain wrappers over `platform::password`. `RawPassword` is validated
//! user input (zeroized on drop); `StoredPassword` is the `salt,digest`
//! form kept in the database.

use platform::password::{ClearTextPassword, PasswordHash, PasswordPolicyError};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped; Debug output is redacted.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password with length validation (3-20 characters,
    /// any content).
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        Ok(Self(ClearTextPassword::new(raw)?))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Stored Password (Hashed, for storage)
// ============================================================================

/// Hashed user password in `salt,digest` format
#[derive(Clone, PartialEq, Eq)]
pub struct StoredPassword(PasswordHash);

impl StoredPassword {
    /// Hash a raw password with a fresh salt. The user name is part of the
    /// digest input.
    pub fn from_raw(user_name: &str, raw: &RawPassword) -> Self {
        Self(PasswordHash::from_raw(user_name, raw.inner()))
    }

    /// Wrap a stored hash string from the database
    pub fn from_storage(value: impl Into<String>) -> Self {
        Self(PasswordHash::from_storage(value))
    }

    /// Get the stored form
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Verify a raw password against this hash (constant-time)
    pub fn verify(&self, user_name: &str, raw: &RawPassword) -> bool {
        self.0.verify(user_name, raw.inner())
    }
}

impl fmt::Debug for StoredPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_password_validation() {
        assert!(RawPassword::new("secret1".to_string()).is_ok());
        assert!(RawPassword::new("ab".to_string()).is_err());
        assert!(RawPassword::new("a".repeat(21)).is_err());
        assert!(RawPassword::new("".to_string()).is_err());
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let stored = StoredPassword::from_raw("alice", &raw);

        assert!(stored.verify("alice", &raw));

        let wrong = RawPassword::new("wrong".to_string()).unwrap();
        assert!(!stored.verify("alice", &wrong));
        assert!(!stored.verify("bob", &raw));
    }

    #[test]
    fn test_storage_roundtrip() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let stored = StoredPassword::from_raw("alice", &raw);

        let restored = StoredPassword::from_storage(stored.as_str().to_string());
        assert!(restored.verify("alice", &raw));
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        assert!(format!("{:?}", raw).contains("REDACTED"));

        let stored = StoredPassword::from_raw("alice", &raw);
        let debug = format!("{:?}", stored);
        assert!(debug.contains("HASH"));
        assert!(!debug.contains("secret1"));
    }
}
