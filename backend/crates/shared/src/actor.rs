//! Authenticated Actor Types
//!
//! The identity resolved from the session cookie, carried through request
//! extensions so downstream crates can read it without resolving sessions
//! themselves.

use crate::id::UserId;

/// The user a valid session cookie resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub user_name: String,
}

/// Per-request authentication context.
///
/// `user` is `None` for anonymous requests, including requests whose
/// session cookie failed signature verification (an invalid signature is
/// "no session", not an error).
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    pub user: Option<CurrentUser>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: CurrentUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Id;

    #[test]
    fn test_anonymous_context() {
        let ctx = AuthContext::anonymous();
        assert!(!ctx.is_authenticated());
        assert!(ctx.user.is_none());
    }

    #[test]
    fn test_authenticated_context() {
        let ctx = AuthContext::authenticated(CurrentUser {
            user_id: Id::new(),
            user_name: "alice".to_string(),
        });
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.user.unwrap().user_name, "alice");
    }

    #[test]
    fn test_default_is_anonymous() {
        assert!(!AuthContext::default().is_authenticated());
    }
}
