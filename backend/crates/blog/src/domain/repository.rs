//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{comment::Comment, post::Post};
use crate::error::BlogResult;
use kernel::id::{PostId, UserId};

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Create a new post
    async fn create(&self, post: &Post) -> BlogResult<()>;

    /// Find post by ID
    async fn find_by_id(&self, post_id: &PostId) -> BlogResult<Option<Post>>;

    /// Update a post (last write wins)
    async fn update(&self, post: &Post) -> BlogResult<()>;

    /// Delete a post (its comments and likes go with it)
    async fn delete(&self, post_id: &PostId) -> BlogResult<()>;

    /// List posts newest first; ties in `created_at` keep insertion order.
    /// Restartable via limit/offset.
    async fn list_recent(&self, limit: i64, offset: i64) -> BlogResult<Vec<Post>>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Create a new comment
    async fn create(&self, comment: &Comment) -> BlogResult<()>;

    /// List a post's comments, oldest first
    async fn list_by_post(&self, post_id: &PostId) -> BlogResult<Vec<Comment>>;
}

/// Like repository trait
///
/// A like is the (post, author) pair itself; at most one exists per pair.
#[trait_variant::make(LikeRepository: Send)]
pub trait LocalLikeRepository {
    /// Record a like; inserting an existing pair is a no-op
    async fn insert(&self, post_id: &PostId, author_id: &UserId) -> BlogResult<()>;

    /// Remove a like; removing a missing pair is a no-op
    async fn remove(&self, post_id: &PostId, author_id: &UserId) -> BlogResult<()>;

    /// Number of likes on a post
    async fn count_by_post(&self, post_id: &PostId) -> BlogResult<i64>;

    /// Whether the user has liked the post
    async fn exists(&self, post_id: &PostId, author_id: &UserId) -> BlogResult<bool>;
}
