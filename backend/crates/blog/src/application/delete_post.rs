//! Delete Post Use Case

use std::sync::Arc;

use kernel::actor::CurrentUser;

use crate::application::require_actor;
use crate::domain::guard;
use crate::domain::repository::PostRepository;
use crate::error::{BlogError, BlogResult};
use kernel::id::PostId;

/// Delete post use case
pub struct DeletePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> DeletePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    /// Same ownership rule as editing. Comments and likes cascade in the
    /// store.
    pub async fn execute(&self, actor: Option<&CurrentUser>, post_id: &PostId) -> BlogResult<()> {
        let actor = require_actor(actor)?;

        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        if !guard::can_delete(Some(actor), &post) {
            return Err(BlogError::NotPostAuthor);
        }

        self.post_repo.delete(post_id).await?;

        tracing::info!(post_id = %post_id, "Post deleted");

        Ok(())
    }
}
