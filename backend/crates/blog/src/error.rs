//! Blog Error Types
//!
//! This module provides content-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

/// Blog-specific error variants
#[derive(Debug, Error)]
pub enum BlogError {
    /// Input failed shape validation (empty title/content)
    #[error("{0}")]
    Validation(String),

    /// Post not found
    #[error("Post not found")]
    PostNotFound,

    /// No authenticated user on a request that requires one
    #[error("Authentication required")]
    Unauthenticated,

    /// Acting user is not the post's author
    #[error("Only the author may modify this post")]
    NotPostAuthor,

    /// Acting user is the post's author (self-comment/self-like)
    #[error("Authors cannot comment on or like their own posts")]
    OwnPost,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BlogError::Validation(_) => StatusCode::BAD_REQUEST,
            BlogError::PostNotFound => StatusCode::NOT_FOUND,
            BlogError::Unauthenticated => StatusCode::UNAUTHORIZED,
            BlogError::NotPostAuthor | BlogError::OwnPost => StatusCode::FORBIDDEN,
            BlogError::Database(_) | BlogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::Validation(_) => ErrorKind::BadRequest,
            BlogError::PostNotFound => ErrorKind::NotFound,
            BlogError::Unauthenticated => ErrorKind::Unauthorized,
            BlogError::NotPostAuthor | BlogError::OwnPost => ErrorKind::Forbidden,
            BlogError::Database(_) | BlogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BlogError::Database(e) => {
                tracing::error!(error = %e, "Blog database error");
            }
            BlogError::Internal(msg) => {
                tracing::error!(message = %msg, "Blog internal error");
            }
            BlogError::NotPostAuthor | BlogError::OwnPost => {
                tracing::warn!(error = %self, "Ownership check rejected request");
            }
            _ => {
                tracing::debug!(error = %self, "Blog error");
            }
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
