//! Get Post Use Case
//!
//! The permalink view: one post with its comments and like state.

use std::sync::Arc;

use kernel::actor::CurrentUser;

use crate::domain::entity::{comment::Comment, post::Post};
use crate::domain::repository::{CommentRepository, LikeRepository, PostRepository};
use crate::error::{BlogError, BlogResult};
use kernel::id::PostId;

/// A post joined with its comments and like state
pub struct PostDetail {
    pub post: Post,
    pub comments: Vec<Comment>,
    pub like_count: i64,
    /// Whether the viewing user has liked this post (false for anonymous)
    pub liked_by_viewer: bool,
}

/// Get post use case
pub struct GetPostUseCase<P, C, L>
where
    P: PostRepository,
    C: CommentRepository,
    L: LikeRepository,
{
    post_repo: Arc<P>,
    comment_repo: Arc<C>,
    like_repo: Arc<L>,
}

impl<P, C, L> GetPostUseCase<P, C, L>
where
    P: PostRepository,
    C: CommentRepository,
    L: LikeRepository,
{
    pub fn new(post_repo: Arc<P>, comment_repo: Arc<C>, like_repo: Arc<L>) -> Self {
        Self {
            post_repo,
            comment_repo,
            like_repo,
        }
    }

    /// Public: viewing needs no session, but the like flag is
    /// viewer-specific.
    pub async fn execute(
        &self,
        viewer: Option<&CurrentUser>,
        post_id: &PostId,
    ) -> BlogResult<PostDetail> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        let comments = self.comment_repo.list_by_post(post_id).await?;
        let like_count = self.like_repo.count_by_post(post_id).await?;

        let liked_by_viewer = match viewer {
            Some(user) => self.like_repo.exists(post_id, &user.user_id).await?,
            None => false,
        };

        Ok(PostDetail {
            post,
            comments,
            like_count,
            liked_by_viewer,
        })
    }
}
