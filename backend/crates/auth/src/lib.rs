//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User signup/signin with username + password
//! - Stateless sessions: a signed `user_id` cookie, verified per request
//! - Anonymous fallback on signature failure (never a hard error)
//!
//! ## Security Model
//! - Passwords stored as salted SHA-256 digests with embedded salt
//! - Session tokens are HMAC-SHA-256 signed under a startup-injected secret
//! - Login failures are indistinguishable between unknown name and wrong
//!   password (no user enumeration)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::session::SessionSigner;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AuthMiddlewareState, load_auth_context};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
