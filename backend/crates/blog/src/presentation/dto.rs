//! API DTOs (Data Transfer Objects)
//!
//! Plain data for the web layer to render; no markup is produced here.

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostId, UserId};
use serde::{Deserialize, Serialize};

use crate::application::get_post::PostDetail;
use crate::domain::entity::{comment::Comment, post::Post};

// ============================================================================
// Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

/// Edit post request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditPostRequest {
    pub title: String,
    pub content: String,
}

/// Add comment request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub content: String,
}

/// Listing pagination query
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ============================================================================
// Responses
// ============================================================================

/// Post response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub post_id: PostId,
    pub author_id: UserId,
    pub title: String,
    pub content: String,
    pub score: i32,
    pub created_at: DateTime<Utc>,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            post_id: post.post_id,
            author_id: post.author_id,
            title: post.title.clone(),
            content: post.content.clone(),
            score: post.score,
            created_at: post.created_at,
        }
    }
}

/// Comment response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub comment_id: CommentId,
    pub post_id: PostId,
    pub author_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            comment_id: comment.comment_id,
            post_id: comment.post_id,
            author_id: comment.author_id,
            content: comment.content.clone(),
            created_at: comment.created_at,
        }
    }
}

/// Permalink response: a post with comments and like state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub comments: Vec<CommentResponse>,
    pub like_count: i64,
    pub liked_by_viewer: bool,
}

impl From<&PostDetail> for PostDetailResponse {
    fn from(detail: &PostDetail) -> Self {
        Self {
            post: PostResponse::from(&detail.post),
            comments: detail.comments.iter().map(CommentResponse::from).collect(),
            like_count: detail.like_count,
            liked_by_viewer: detail.liked_by_viewer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::Id;

    fn sample_post() -> Post {
        Post::new(Id::new(), "Title".into(), "Body".into()).unwrap()
    }

    #[test]
    fn test_create_post_request_deserialization() {
        let json = r#"{"title":"Hello","content":"World"}"#;
        let req: CreatePostRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.title, "Hello");
        assert_eq!(req.content, "World");
    }

    #[test]
    fn test_list_query_defaults() {
        let query: ListPostsQuery = serde_json::from_str("{}").unwrap();
        assert!(query.limit.is_none());
        assert!(query.offset.is_none());
    }

    #[test]
    fn test_post_response_serialization() {
        let json = serde_json::to_string(&PostResponse::from(&sample_post())).unwrap();
        assert!(json.contains("postId"));
        assert!(json.contains("authorId"));
        assert!(json.contains(r#""score":0"#));
        assert!(json.contains("createdAt"));
    }

    #[test]
    fn test_post_detail_flattens_post_fields() {
        let post = sample_post();
        let detail = PostDetail {
            post: post.clone(),
            comments: vec![],
            like_count: 3,
            liked_by_viewer: true,
        };

        let json = serde_json::to_string(&PostDetailResponse::from(&detail)).unwrap();
        assert!(json.contains("postId"));
        assert!(json.contains(r#""likeCount":3"#));
        assert!(json.contains(r#""likedByViewer":true"#));
        assert!(json.contains(r#""comments":[]"#));
    }
}
