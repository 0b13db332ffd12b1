//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, StoredPassword},
};

/// User entity
///
/// The id is assigned at creation and never changes. The password hash
/// carries its own salt and is Debug-redacted by its type.
#[derive(Debug, Clone)]
pub struct User {
    /// Immutable identifier
    pub user_id: UserId,
    /// User name (unique, for login and display)
    pub user_name: UserName,
    /// Salted password hash
    pub password_hash: StoredPassword,
    /// Registration timestamp
    pub registered_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a freshly salted password hash
    pub fn register(user_name: UserName, password: &RawPassword) -> Self {
        let password_hash = StoredPassword::from_raw(user_name.as_str(), password);

        Self {
            user_id: UserId::new(),
            user_name,
            password_hash,
            registered_at: Utc::now(),
        }
    }

    /// Verify an offered password against the stored hash
    pub fn verify_password(&self, password: &RawPassword) -> bool {
        self.password_hash
            .verify(self.user_name.as_str(), password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, password: &str) -> User {
        let user_name = UserName::new(name).unwrap();
        let raw = RawPassword::new(password.to_string()).unwrap();
        User::register(user_name, &raw)
    }

    #[test]
    fn test_register_assigns_distinct_ids() {
        let a = user("alice", "secret1");
        let b = user("alice", "secret1");
        assert_ne!(a.user_id, b.user_id);
    }

    #[test]
    fn test_verify_password() {
        let u = user("alice", "secret1");

        assert!(u.verify_password(&RawPassword::new("secret1".to_string()).unwrap()));
        assert!(!u.verify_password(&RawPassword::new("secret2".to_string()).unwrap()));
    }

    #[test]
    fn test_same_password_different_hash() {
        // Fresh salt per registration
        let a = user("alice", "secret1");
        let b = user("bobby", "secret1");
        assert_ne!(a.password_hash.as_str(), b.password_hash.as_str());
    }
}
