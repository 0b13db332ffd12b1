//! Edit Post Use Case

use std::sync::Arc;

use kernel::actor::CurrentUser;

use crate::application::require_actor;
use crate::domain::entity::post::Post;
use crate::domain::guard;
use crate::domain::repository::PostRepository;
use crate::error::{BlogError, BlogResult};
use kernel::id::PostId;

/// Edit post input
pub struct EditPostInput {
    pub title: String,
    pub content: String,
}

/// Edit post use case
pub struct EditPostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> EditPostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    /// Lookup, then ownership, then field validation; concurrent edits are
    /// last-write-wins.
    pub async fn execute(
        &self,
        actor: Option<&CurrentUser>,
        post_id: &PostId,
        input: EditPostInput,
    ) -> BlogResult<Post> {
        let actor = require_actor(actor)?;

        let mut post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        if !guard::can_edit(Some(actor), &post) {
            return Err(BlogError::NotPostAuthor);
        }

        post.apply_edit(input.title, input.content)?;
        self.post_repo.update(&post).await?;

        tracing::info!(post_id = %post.post_id, "Post edited");

        Ok(post)
    }
}
