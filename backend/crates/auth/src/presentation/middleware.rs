//! Auth Middleware
//!
//! Resolves the session cookie once per request and stores the result in
//! request extensions, so downstream handlers (including other crates) read
//! the acting user without touching the session machinery.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use kernel::actor::AuthContext;

use crate::application::CurrentUserUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that resolves the session cookie into an [`AuthContext`].
///
/// A failed signature or unknown user yields the anonymous context; only a
/// storage fault fails the request.
pub async fn load_auth_context<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token =
        platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case = CurrentUserUseCase::new(state.repo.clone(), state.config.clone());

    let context = match use_case.resolve(token.as_deref()).await {
        Ok(Some(user)) => AuthContext::authenticated(user),
        Ok(None) => AuthContext::anonymous(),
        Err(e) => return e.into_response(),
    };

    req.extensions_mut().insert(context);

    next.run(req).await
}
