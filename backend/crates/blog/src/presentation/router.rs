//! Blog Router

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::{CommentRepository, LikeRepository, PostRepository};
use crate::infra::postgres::PgBlogRepository;
use crate::presentation::handlers::{self, BlogAppState};

/// Create the Blog router with PostgreSQL repository
///
/// Expects the auth crate's `load_auth_context` middleware to be layered
/// above it so handlers find an `AuthContext` in request extensions.
pub fn blog_router(repo: PgBlogRepository) -> Router {
    blog_router_generic(repo)
}

/// Create a generic Blog router for any repository implementation
pub fn blog_router_generic<R>(repo: R) -> Router
where
    R: PostRepository + CommentRepository + LikeRepository + Clone + Send + Sync + 'static,
{
    let state = BlogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/posts", get(handlers::list_posts::<R>))
        .route("/posts", post(handlers::create_post::<R>))
        .route("/posts/{id}", get(handlers::get_post::<R>))
        .route("/posts/{id}", put(handlers::edit_post::<R>))
        .route("/posts/{id}", delete(handlers::delete_post::<R>))
        .route("/posts/{id}/comments", post(handlers::add_comment::<R>))
        .route("/posts/{id}/like", post(handlers::like_post::<R>))
        .route("/posts/{id}/like", delete(handlers::unlike_post::<R>))
        .with_state(state)
}
