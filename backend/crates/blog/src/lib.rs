//! Blog (Content) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, authorization guard, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Ownership Model
//! - Posts and comments reference their author; only the author may edit
//!   or delete a post
//! - Authors may not comment on or like their own posts
//! - The acting user arrives in request extensions as
//!   [`kernel::actor::AuthContext`], resolved upstream by the auth crate

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{BlogError, BlogResult};
pub use infra::postgres::PgBlogRepository;
pub use presentation::router::blog_router;
