//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;
use kernel::id::UserId;

/// User repository trait
///
/// Implementations must enforce user-name uniqueness at the storage layer
/// (`create` on a taken name fails with `UserNameTaken`), so two concurrent
/// registrations of the same name cannot both succeed.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by user name
    async fn find_by_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Check if user name exists
    async fn exists_by_name(&self, user_name: &UserName) -> AuthResult<bool>;
}
