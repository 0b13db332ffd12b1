//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{comment::Comment, post::Post};
use crate::domain::repository::{CommentRepository, LikeRepository, PostRepository};
use crate::error::BlogResult;
use kernel::id::{CommentId, PostId, UserId};

/// PostgreSQL-backed blog repository
///
/// One struct implements all three content repositories, sharing the pool.
/// Recency ordering leans on the `seq` BIGSERIAL column: `created_at DESC,
/// seq` yields newest first with ties in insertion order.
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgBlogRepository {
    async fn create(&self, post: &Post) -> BlogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                author_id,
                title,
                content,
                score,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.author_id.as_uuid())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.score)
        .bind(post.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> BlogResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                post_id,
                author_id,
                title,
                content,
                score,
                created_at
            FROM posts
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_post()))
    }

    async fn update(&self, post: &Post) -> BlogResult<()> {
        sqlx::query(
            r#"
            UPDATE posts SET
                title = $2,
                content = $3,
                score = $4
            WHERE post_id = $1
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.score)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> BlogResult<()> {
        // Comments and likes go via ON DELETE CASCADE
        sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list_recent(&self, limit: i64, offset: i64) -> BlogResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                post_id,
                author_id,
                title,
                content,
                score,
                created_at
            FROM posts
            ORDER BY created_at DESC, seq
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_post()).collect())
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgBlogRepository {
    async fn create(&self, comment: &Comment) -> BlogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (
                comment_id,
                post_id,
                author_id,
                content,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.comment_id.as_uuid())
        .bind(comment.post_id.as_uuid())
        .bind(comment.author_id.as_uuid())
        .bind(&comment.content)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_post(&self, post_id: &PostId) -> BlogResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT
                comment_id,
                post_id,
                author_id,
                content,
                created_at
            FROM comments
            WHERE post_id = $1
            ORDER BY created_at, comment_id
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_comment()).collect())
    }
}

// ============================================================================
// Like Repository Implementation
// ============================================================================

impl LikeRepository for PgBlogRepository {
    async fn insert(&self, post_id: &PostId, author_id: &UserId) -> BlogResult<()> {
        // Composite primary key keeps the pair unique; re-liking is a no-op
        sqlx::query(
            r#"
            INSERT INTO likes (post_id, author_id)
            VALUES ($1, $2)
            ON CONFLICT (post_id, author_id) DO NOTHING
            "#,
        )
        .bind(post_id.as_uuid())
        .bind(author_id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove(&self, post_id: &PostId, author_id: &UserId) -> BlogResult<()> {
        sqlx::query("DELETE FROM likes WHERE post_id = $1 AND author_id = $2")
            .bind(post_id.as_uuid())
            .bind(author_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count_by_post(&self, post_id: &PostId) -> BlogResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM likes WHERE post_id = $1",
        )
        .bind(post_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn exists(&self, post_id: &PostId, author_id: &UserId) -> BlogResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE post_id = $1 AND author_id = $2)",
        )
        .bind(post_id.as_uuid())
        .bind(author_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    author_id: Uuid,
    title: String,
    content: String,
    score: i32,
    created_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            author_id: UserId::from_uuid(self.author_id),
            title: self.title,
            content: self.content,
            score: self.score,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    comment_id: Uuid,
    post_id: Uuid,
    author_id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            comment_id: CommentId::from_uuid(self.comment_id),
            post_id: PostId::from_uuid(self.post_id),
            author_id: UserId::from_uuid(self.author_id),
            content: self.content,
            created_at: self.created_at,
        }
    }
}
