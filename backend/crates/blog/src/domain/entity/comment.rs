//! Comment Entity

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostId, UserId};

use super::require_non_empty;
use crate::error::BlogResult;

/// Comment entity
///
/// The policy that a comment's author must differ from the post's author is
/// enforced by the guard at use-case level, not here; the entity only knows
/// its references.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub comment_id: CommentId,
    pub post_id: PostId,
    pub author_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment with validated content
    pub fn new(post_id: PostId, author_id: UserId, content: String) -> BlogResult<Self> {
        require_non_empty("content", &content)?;

        Ok(Self {
            comment_id: CommentId::new(),
            post_id,
            author_id,
            content,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_comment() {
        let post_id = PostId::new();
        let author_id = UserId::new();
        let comment = Comment::new(post_id, author_id, "Nice post".into()).unwrap();

        assert_eq!(comment.post_id, post_id);
        assert_eq!(comment.author_id, author_id);
        assert_eq!(comment.content, "Nice post");
    }

    #[test]
    fn test_new_comment_rejects_empty_content() {
        assert!(Comment::new(PostId::new(), UserId::new(), "".into()).is_err());
        assert!(Comment::new(PostId::new(), UserId::new(), "  \n".into()).is_err());
    }
}
