//! Application Layer
//!
//! One use case per operation. Every mutating use case applies the
//! authorization guard before touching the store.

pub mod add_comment;
pub mod create_post;
pub mod delete_post;
pub mod edit_post;
pub mod get_post;
pub mod like_post;
pub mod list_posts;

// Re-exports
pub use add_comment::AddCommentUseCase;
pub use create_post::{CreatePostInput, CreatePostUseCase};
pub use delete_post::DeletePostUseCase;
pub use edit_post::{EditPostInput, EditPostUseCase};
pub use get_post::{GetPostUseCase, PostDetail};
pub use like_post::{LikePostUseCase, UnlikePostUseCase};
pub use list_posts::{ListPostsUseCase, MAX_PAGE_SIZE};

use kernel::actor::CurrentUser;

use crate::domain::guard;
use crate::error::{BlogError, BlogResult};

/// Guard translation shared by the mutating use cases: an anonymous actor
/// becomes `Unauthenticated`.
pub(crate) fn require_actor(actor: Option<&CurrentUser>) -> BlogResult<&CurrentUser> {
    if !guard::require_authenticated(actor) {
        return Err(BlogError::Unauthenticated);
    }
    actor.ok_or(BlogError::Unauthenticated)
}
