//! Current User Use Case
//!
//! Resolves the acting user from the session cookie. Sessions are
//! stateless: the cookie carries a signed user id, and resolution is a
//! signature check plus a directory lookup.

use std::sync::Arc;

use kernel::actor::CurrentUser;
use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::application::session::SessionSigner;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

/// Current user resolution use case
pub struct CurrentUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> CurrentUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Resolve the session cookie value to a user.
    ///
    /// A missing cookie, failed signature, unparseable id, or vanished user
    /// all resolve to anonymous (`Ok(None)`); only storage faults are
    /// errors.
    pub async fn resolve(&self, cookie_value: Option<&str>) -> AuthResult<Option<CurrentUser>> {
        let Some(token) = cookie_value else {
            return Ok(None);
        };

        let signer = SessionSigner::from_config(&self.config);
        let Some(value) = signer.verify(token) else {
            tracing::debug!("Session cookie failed signature verification");
            return Ok(None);
        };

        let Ok(user_id) = UserId::parse(value) else {
            tracing::debug!("Session cookie carried a non-id value");
            return Ok(None);
        };

        let Some(user) = self.user_repo.find_by_id(&user_id).await? else {
            return Ok(None);
        };

        Ok(Some(CurrentUser {
            user_id: user.user_id,
            user_name: user.user_name.into_inner(),
        }))
    }
}
