//! Post Entity

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

use super::require_non_empty;
use crate::error::BlogResult;

/// Post entity
///
/// `author_id` references the user that created the post and never
/// changes; neither do `post_id`, `created_at`, or `score` across edits.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub post_id: PostId,
    pub author_id: UserId,
    pub title: String,
    pub content: String,
    pub score: i32,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with validated title and content
    pub fn new(author_id: UserId, title: String, content: String) -> BlogResult<Self> {
        require_non_empty("title", &title)?;
        require_non_empty("content", &content)?;

        Ok(Self {
            post_id: PostId::new(),
            author_id,
            title,
            content,
            score: 0,
            created_at: Utc::now(),
        })
    }

    /// Replace title and content in place, keeping everything else
    pub fn apply_edit(&mut self, title: String, content: String) -> BlogResult<()> {
        require_non_empty("title", &title)?;
        require_non_empty("content", &content)?;

        self.title = title;
        self.content = content;
        Ok(())
    }

    /// Whether the given user is the post's author
    pub fn is_author(&self, user_id: &UserId) -> bool {
        &self.author_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_defaults() {
        let author = UserId::new();
        let post = Post::new(author, "Title".into(), "Body".into()).unwrap();

        assert_eq!(post.author_id, author);
        assert_eq!(post.score, 0);
        assert!(post.is_author(&author));
        assert!(!post.is_author(&UserId::new()));
    }

    #[test]
    fn test_new_post_rejects_empty_fields() {
        let author = UserId::new();
        assert!(Post::new(author, "".into(), "Body".into()).is_err());
        assert!(Post::new(author, "Title".into(), "   ".into()).is_err());
    }

    #[test]
    fn test_apply_edit_preserves_identity() {
        let mut post = Post::new(UserId::new(), "Old".into(), "Old body".into()).unwrap();
        let id = post.post_id;
        let author = post.author_id;
        let created_at = post.created_at;

        post.apply_edit("New".into(), "New body".into()).unwrap();

        assert_eq!(post.title, "New");
        assert_eq!(post.content, "New body");
        assert_eq!(post.post_id, id);
        assert_eq!(post.author_id, author);
        assert_eq!(post.created_at, created_at);
        assert_eq!(post.score, 0);
    }

    #[test]
    fn test_apply_edit_rejects_empty_and_keeps_old_values() {
        let mut post = Post::new(UserId::new(), "Old".into(), "Old body".into()).unwrap();

        assert!(post.apply_edit("".into(), "New body".into()).is_err());
        assert_eq!(post.title, "Old");
        assert_eq!(post.content, "Old body");
    }
}
