//! Session Signer
//!
//! Produces and validates tamper-evident session tokens. A token is
//! `value|hexmac` where `hexmac` is the hex-encoded HMAC-SHA-256 of `value`
//! under the server-side session secret.
//!
//! Verification splits on the *last* `|`, re-signs the value, and requires
//! the result to equal the supplied token exactly. The signed value is a
//! UUID in text form (hex digits and dashes), so it can never contain the
//! separator itself.

use hmac::{Hmac, Mac};
use platform::crypto::{constant_time_eq, hex_encode};
use sha2::Sha256;

use crate::application::config::AuthConfig;

/// Separator between value and MAC in a session token
const TOKEN_SEPARATOR: char = '|';

/// Signs and verifies session cookie values under a fixed secret.
#[derive(Clone)]
pub struct SessionSigner {
    secret: [u8; 32],
}

impl SessionSigner {
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.session_secret)
    }

    /// Sign a value, producing `value|hexmac`
    pub fn sign(&self, value: &str) -> String {
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(value.as_bytes());
        let tag = mac.finalize().into_bytes();

        format!("{value}{TOKEN_SEPARATOR}{}", hex_encode(&tag))
    }

    /// Verify a token, returning the signed value on success.
    ///
    /// Returns `None` for malformed tokens, wrong MACs, and any other
    /// mismatch; callers treat that as "no session", not an error.
    pub fn verify<'a>(&self, token: &'a str) -> Option<&'a str> {
        let (value, _mac) = token.rsplit_once(TOKEN_SEPARATOR)?;

        let expected = self.sign(value);
        constant_time_eq(expected.as_bytes(), token.as_bytes()).then_some(value)
    }
}

impl std::fmt::Debug for SessionSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSigner")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> SessionSigner {
        SessionSigner::new([7u8; 32])
    }

    #[test]
    fn test_token_shape() {
        let token = signer().sign("42");
        let (value, mac) = token.rsplit_once('|').unwrap();
        assert_eq!(value, "42");
        assert_eq!(mac.len(), 64);
        assert!(mac.bytes().all(|b| b.is_ascii_hexdigit()));
    }

    #[test]
    fn test_sign_verify_roundtrip() {
        let signer = signer();
        let token = signer.sign("1b4e28ba-2fa1-11d2-883f-0016d3cca427");
        assert_eq!(
            signer.verify(&token),
            Some("1b4e28ba-2fa1-11d2-883f-0016d3cca427")
        );
    }

    #[test]
    fn test_verify_rejects_any_corruption() {
        let signer = signer();
        let token = signer.sign("42");

        for i in 0..token.len() {
            let mut corrupted = token.clone().into_bytes();
            corrupted[i] ^= 0x01;
            let corrupted = String::from_utf8_lossy(&corrupted).into_owned();
            assert_eq!(signer.verify(&corrupted), None, "corruption at byte {i}");
        }
    }

    #[test]
    fn test_verify_rejects_other_secret() {
        let token = SessionSigner::new([1u8; 32]).sign("42");
        assert_eq!(SessionSigner::new([2u8; 32]).verify(&token), None);
    }

    #[test]
    fn test_verify_rejects_malformed() {
        let signer = signer();
        assert_eq!(signer.verify(""), None);
        assert_eq!(signer.verify("no-separator"), None);
        assert_eq!(signer.verify("42|"), None);
        assert_eq!(signer.verify("|deadbeef"), None);
    }

    #[test]
    fn test_verify_splits_on_last_separator() {
        // A value that itself contains the separator still round-trips,
        // because verification re-signs everything left of the last one.
        let signer = signer();
        let token = signer.sign("a|b");
        assert_eq!(signer.verify(&token), Some("a|b"));
    }

    #[test]
    fn test_debug_redaction() {
        assert!(!format!("{:?}", signer()).contains("7"));
    }
}
