//! Like / Unlike Post Use Cases
//!
//! Likes are idempotent: liking twice or removing a missing like is a
//! no-op, the (post, author) pair exists at most once.

use std::sync::Arc;

use kernel::actor::CurrentUser;

use crate::application::require_actor;
use crate::domain::guard;
use crate::domain::repository::{LikeRepository, PostRepository};
use crate::error::{BlogError, BlogResult};
use kernel::id::PostId;

/// Like post use case
pub struct LikePostUseCase<P, L>
where
    P: PostRepository,
    L: LikeRepository,
{
    post_repo: Arc<P>,
    like_repo: Arc<L>,
}

impl<P, L> LikePostUseCase<P, L>
where
    P: PostRepository,
    L: LikeRepository,
{
    pub fn new(post_repo: Arc<P>, like_repo: Arc<L>) -> Self {
        Self {
            post_repo,
            like_repo,
        }
    }

    /// Same ownership-exclusion rule as commenting: no likes on own posts.
    pub async fn execute(&self, actor: Option<&CurrentUser>, post_id: &PostId) -> BlogResult<()> {
        let actor = require_actor(actor)?;

        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        if !guard::can_like(Some(actor), &post) {
            return Err(BlogError::OwnPost);
        }

        self.like_repo.insert(post_id, &actor.user_id).await?;

        tracing::debug!(post_id = %post_id, author_id = %actor.user_id, "Post liked");

        Ok(())
    }
}

/// Unlike post use case
pub struct UnlikePostUseCase<P, L>
where
    P: PostRepository,
    L: LikeRepository,
{
    post_repo: Arc<P>,
    like_repo: Arc<L>,
}

impl<P, L> UnlikePostUseCase<P, L>
where
    P: PostRepository,
    L: LikeRepository,
{
    pub fn new(post_repo: Arc<P>, like_repo: Arc<L>) -> Self {
        Self {
            post_repo,
            like_repo,
        }
    }

    /// No ownership check: the author never has a like to remove, so the
    /// removal is a harmless no-op for them.
    pub async fn execute(&self, actor: Option<&CurrentUser>, post_id: &PostId) -> BlogResult<()> {
        let actor = require_actor(actor)?;

        self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        self.like_repo.remove(post_id, &actor.user_id).await?;

        tracing::debug!(post_id = %post_id, author_id = %actor.user_id, "Post unliked");

        Ok(())
    }
}
