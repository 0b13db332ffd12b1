//! Sign Up Use Case
//!
//! Creates a new user account and logs it in.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session::SessionSigner;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub user_name: String,
    pub password: String,
}

/// Sign up output
pub struct SignUpOutput {
    pub user: User,
    /// Session token for the cookie (registration logs the user in)
    pub session_token: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Validate inputs, then check name availability, then create.
    ///
    /// The availability check is advisory; the storage layer's uniqueness
    /// constraint decides the race between concurrent registrations, and
    /// the loser surfaces as `UserNameTaken` from `create`.
    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let user_name = UserName::new(input.user_name)
            .map_err(|e| AuthError::InvalidUserName(e.to_string()))?;

        let password = RawPassword::new(input.password)
            .map_err(|e| AuthError::PasswordValidation(e.to_string()))?;

        if self.user_repo.exists_by_name(&user_name).await? {
            return Err(AuthError::UserNameTaken);
        }

        let user = User::register(user_name, &password);
        self.user_repo.create(&user).await?;

        let session_token =
            SessionSigner::from_config(&self.config).sign(&user.user_id.to_string());

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(SignUpOutput {
            user,
            session_token,
        })
    }
}
