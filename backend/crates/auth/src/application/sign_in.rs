//! Sign In Use Case
//!
//! Authenticates a user and produces a session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session::SessionSigner;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    pub user: User,
    /// Session token for the cookie
    pub session_token: String,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Authenticate by name and password.
    ///
    /// Every failure mode (malformed name, unknown name, wrong password)
    /// answers with the same `InvalidCredentials`, so the response does not
    /// reveal whether the name exists.
    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let user_name =
            UserName::new(input.user_name).map_err(|_| AuthError::InvalidCredentials)?;

        let password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.verify_password(&password) {
            return Err(AuthError::InvalidCredentials);
        }

        let session_token =
            SessionSigner::from_config(&self.config).sign(&user.user_id.to_string());

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User signed in"
        );

        Ok(SignInOutput {
            user,
            session_token,
        })
    }
}
