//! HTTP Handlers
//!
//! The thin orchestration boundary: each handler reads the resolved
//! [`AuthContext`] from request extensions (populated by the auth crate's
//! middleware), runs the matching use case, and maps the outcome to JSON.

use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use kernel::actor::AuthContext;
use kernel::id::PostId;

use crate::application::{
    AddCommentUseCase, CreatePostInput, CreatePostUseCase, DeletePostUseCase, EditPostInput,
    EditPostUseCase, GetPostUseCase, LikePostUseCase, ListPostsUseCase, UnlikePostUseCase,
};
use crate::domain::repository::{CommentRepository, LikeRepository, PostRepository};
use crate::error::BlogResult;
use crate::presentation::dto::{
    AddCommentRequest, CommentResponse, CreatePostRequest, EditPostRequest, ListPostsQuery,
    PostDetailResponse, PostResponse,
};

/// Shared state for blog handlers
#[derive(Clone)]
pub struct BlogAppState<R>
where
    R: PostRepository + CommentRepository + LikeRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Listing / Permalink
// ============================================================================

/// GET /api/blog/posts
pub async fn list_posts<R>(
    State(state): State<BlogAppState<R>>,
    Query(query): Query<ListPostsQuery>,
) -> BlogResult<Json<Vec<PostResponse>>>
where
    R: PostRepository + CommentRepository + LikeRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPostsUseCase::new(state.repo.clone());
    let posts = use_case.execute(query.limit, query.offset).await?;

    Ok(Json(posts.iter().map(PostResponse::from).collect()))
}

/// GET /api/blog/posts/{id}
pub async fn get_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    Path(post_id): Path<Uuid>,
) -> BlogResult<Json<PostDetailResponse>>
where
    R: PostRepository + CommentRepository + LikeRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetPostUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone());

    let detail = use_case
        .execute(ctx.user.as_ref(), &PostId::from_uuid(post_id))
        .await?;

    Ok(Json(PostDetailResponse::from(&detail)))
}

// ============================================================================
// Post mutations
// ============================================================================

/// POST /api/blog/posts
pub async fn create_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    Json(req): Json<CreatePostRequest>,
) -> BlogResult<impl IntoResponse>
where
    R: PostRepository + CommentRepository + LikeRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.repo.clone());

    let input = CreatePostInput {
        title: req.title,
        content: req.content,
    };

    let post = use_case.execute(ctx.user.as_ref(), input).await?;

    Ok((StatusCode::CREATED, Json(PostResponse::from(&post))))
}

/// PUT /api/blog/posts/{id}
pub async fn edit_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    Path(post_id): Path<Uuid>,
    Json(req): Json<EditPostRequest>,
) -> BlogResult<Json<PostResponse>>
where
    R: PostRepository + CommentRepository + LikeRepository + Clone + Send + Sync + 'static,
{
    let use_case = EditPostUseCase::new(state.repo.clone());

    let input = EditPostInput {
        title: req.title,
        content: req.content,
    };

    let post = use_case
        .execute(ctx.user.as_ref(), &PostId::from_uuid(post_id), input)
        .await?;

    Ok(Json(PostResponse::from(&post)))
}

/// DELETE /api/blog/posts/{id}
pub async fn delete_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    Path(post_id): Path<Uuid>,
) -> BlogResult<StatusCode>
where
    R: PostRepository + CommentRepository + LikeRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeletePostUseCase::new(state.repo.clone());

    use_case
        .execute(ctx.user.as_ref(), &PostId::from_uuid(post_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Comments
// ============================================================================

/// POST /api/blog/posts/{id}/comments
pub async fn add_comment<R>(
    State(state): State<BlogAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    Path(post_id): Path<Uuid>,
    Json(req): Json<AddCommentRequest>,
) -> BlogResult<impl IntoResponse>
where
    R: PostRepository + CommentRepository + LikeRepository + Clone + Send + Sync + 'static,
{
    let use_case = AddCommentUseCase::new(state.repo.clone(), state.repo.clone());

    let comment = use_case
        .execute(ctx.user.as_ref(), &PostId::from_uuid(post_id), req.content)
        .await?;

    Ok((StatusCode::CREATED, Json(CommentResponse::from(&comment))))
}

// ============================================================================
// Likes
// ============================================================================

/// POST /api/blog/posts/{id}/like
pub async fn like_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    Path(post_id): Path<Uuid>,
) -> BlogResult<StatusCode>
where
    R: PostRepository + CommentRepository + LikeRepository + Clone + Send + Sync + 'static,
{
    let use_case = LikePostUseCase::new(state.repo.clone(), state.repo.clone());

    use_case
        .execute(ctx.user.as_ref(), &PostId::from_uuid(post_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/blog/posts/{id}/like
pub async fn unlike_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    Path(post_id): Path<Uuid>,
) -> BlogResult<StatusCode>
where
    R: PostRepository + CommentRepository + LikeRepository + Clone + Send + Sync + 'static,
{
    let use_case = UnlikePostUseCase::new(state.repo.clone(), state.repo.clone());

    use_case
        .execute(ctx.user.as_ref(), &PostId::from_uuid(post_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
