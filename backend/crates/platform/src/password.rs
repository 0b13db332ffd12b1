//! Credential Hashing and Verification
//!
//! Passwords are stored as `salt,digest` where `digest` is the hex-encoded
//! SHA-256 of `user_name + password + salt`. The salt is embedded in the
//! stored value, so verification needs only the stored string and the
//! offered credentials.
//!
//! ## Security Features
//! - Per-user random salt defeats precomputed-hash attacks
//! - Zeroization of clear-text material
//! - Constant-time comparison during verification

use std::fmt;

use rand::Rng;
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{constant_time_eq, hex_encode, sha256};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length (in characters)
pub const MIN_PASSWORD_LENGTH: usize = 3;

/// Maximum password length (in characters)
pub const MAX_PASSWORD_LENGTH: usize = 20;

/// Salt length (in characters)
pub const SALT_LENGTH: usize = 5;

/// Salt alphabet: ASCII letters, upper and lower case
const SALT_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Separator between salt and digest in the stored format
const HASH_SEPARATOR: char = ',';

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too short
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// The password content is unrestricted; only the length is validated.
/// Unicode input is NFKC-normalized before validation and hashing, so the
/// same password always hashes the same way regardless of input form.
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password with length validation
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();

        // Count Unicode code points, not bytes
        let char_count = normalized.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        Ok(Self(normalized))
    }

    /// Create without validation (for testing)
    #[cfg(test)]
    pub fn new_unchecked(raw: String) -> Self {
        Self(raw)
    }

    /// Get the password bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Password Hash (Safe to store)
// ============================================================================

/// Stored credential in `salt,digest` format
///
/// ## Examples
/// ```rust
/// use platform::password::{ClearTextPassword, PasswordHash};
///
/// let password = ClearTextPassword::new("hunter2!".to_string()).unwrap();
/// let hash = PasswordHash::from_raw("alice", &password);
///
/// // Later, verify
/// assert!(hash.verify("alice", &password));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash {
    value: String,
}

impl PasswordHash {
    /// Hash a password with a fresh random salt
    ///
    /// The user name is part of the digest input, so the same password
    /// hashes differently for different users even with an equal salt.
    pub fn from_raw(user_name: &str, password: &ClearTextPassword) -> Self {
        Self::with_salt(user_name, password, &random_salt())
    }

    /// Hash a password with an explicit salt (used by verification)
    fn with_salt(user_name: &str, password: &ClearTextPassword, salt: &str) -> Self {
        let mut input =
            Vec::with_capacity(user_name.len() + password.as_bytes().len() + salt.len());
        input.extend_from_slice(user_name.as_bytes());
        input.extend_from_slice(password.as_bytes());
        input.extend_from_slice(salt.as_bytes());

        let digest = hex_encode(&sha256(&input));
        input.zeroize();

        Self {
            value: format!("{salt}{HASH_SEPARATOR}{digest}"),
        }
    }

    /// Wrap a stored hash string (e.g. from the database)
    ///
    /// The value is taken verbatim; a malformed string is not an error
    /// here, it simply never verifies.
    pub fn from_storage(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Get the stored form
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Verify offered credentials against this hash
    ///
    /// Extracts the embedded salt, recomputes the digest, and compares in
    /// constant time. A stored value without the separator fails
    /// verification instead of panicking.
    pub fn verify(&self, user_name: &str, password: &ClearTextPassword) -> bool {
        let Some((salt, _digest)) = self.value.split_once(HASH_SEPARATOR) else {
            return false;
        };

        let recomputed = Self::with_salt(user_name, password, salt);
        constant_time_eq(recomputed.value.as_bytes(), self.value.as_bytes())
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHash")
            .field("value", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Generate a random salt: `SALT_LENGTH` characters drawn uniformly from
/// the letter alphabet.
pub fn random_salt() -> String {
    let mut rng = OsRng;
    (0..SALT_LENGTH)
        .map(|_| SALT_ALPHABET[rng.gen_range(0..SALT_ALPHABET.len())] as char)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
