//! List Posts Use Case

use std::sync::Arc;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::BlogResult;

/// Default number of posts per page
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Upper bound on a single page
pub const MAX_PAGE_SIZE: i64 = 100;

/// List posts use case
///
/// Public: listing needs no session. Ordering is newest first, ties in
/// `created_at` keep insertion order; limit/offset makes the sequence
/// restartable.
pub struct ListPostsUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> ListPostsUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, limit: Option<i64>, offset: Option<i64>) -> BlogResult<Vec<Post>> {
        let limit = limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        let offset = offset.unwrap_or(0).max(0);

        self.post_repo.list_recent(limit, offset).await
    }
}
