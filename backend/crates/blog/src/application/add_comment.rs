//! Add Comment Use Case

use std::sync::Arc;

use kernel::actor::CurrentUser;

use crate::application::require_actor;
use crate::domain::entity::comment::Comment;
use crate::domain::guard;
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::{BlogError, BlogResult};
use kernel::id::PostId;

/// Add comment use case
pub struct AddCommentUseCase<P, C>
where
    P: PostRepository,
    C: CommentRepository,
{
    post_repo: Arc<P>,
    comment_repo: Arc<C>,
}

impl<P, C> AddCommentUseCase<P, C>
where
    P: PostRepository,
    C: CommentRepository,
{
    pub fn new(post_repo: Arc<P>, comment_repo: Arc<C>) -> Self {
        Self {
            post_repo,
            comment_repo,
        }
    }

    /// Lookup, then the self-comment check, then content validation.
    pub async fn execute(
        &self,
        actor: Option<&CurrentUser>,
        post_id: &PostId,
        content: String,
    ) -> BlogResult<Comment> {
        let actor = require_actor(actor)?;

        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        if !guard::can_comment(Some(actor), &post) {
            return Err(BlogError::OwnPost);
        }

        let comment = Comment::new(post.post_id, actor.user_id, content)?;
        self.comment_repo.create(&comment).await?;

        tracing::info!(
            comment_id = %comment.comment_id,
            post_id = %comment.post_id,
            author_id = %comment.author_id,
            "Comment added"
        );

        Ok(comment)
    }
}
