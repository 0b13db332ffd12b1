//! Create Post Use Case

use std::sync::Arc;

use kernel::actor::CurrentUser;

use crate::application::require_actor;
use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::BlogResult;

/// Create post input
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
}

/// Create post use case
pub struct CreatePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> CreatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(
        &self,
        actor: Option<&CurrentUser>,
        input: CreatePostInput,
    ) -> BlogResult<Post> {
        let actor = require_actor(actor)?;

        let post = Post::new(actor.user_id, input.title, input.content)?;
        self.post_repo.create(&post).await?;

        tracing::info!(
            post_id = %post.post_id,
            author_id = %post.author_id,
            "Post created"
        );

        Ok(post)
    }
}
