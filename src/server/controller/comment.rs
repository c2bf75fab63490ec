use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto, UpdateCommentDto},
    },
    server::{
        controller::extract::{Json, Path},
        error::AppError,
        middleware::auth::AuthMember,
        model::comment::{Comment, CreateCommentParams, UpdateCommentParams},
        service::comment::CommentService,
        state::AppState,
    },
};

pub static COMMENT_TAG: &str = "comment";

/// GET /api/posts/{post_id}/comments - List a post's comments, replies included
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Comments and replies of the post, oldest first", body = Vec<CommentDto>),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db).list(post_id).await?;

    let dto: Vec<CommentDto> = comments.into_iter().map(Comment::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// POST /api/posts/{post_id}/comments - Comment on a post
///
/// # Authentication
/// Requires `Authorization: Bearer <token>` naming an existing member
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Blank content", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    AuthMember(member_id): AuthMember,
    Path(post_id): Path<i32>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let comment = CommentService::new(&state.db)
        .create(CreateCommentParams::new(member_id, post_id, payload.content)?)
        .await?;

    let location = format!("/api/posts/{}/comments/{}", post_id, comment.id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(comment.into_dto())))
}

/// PUT /api/posts/{post_id}/comments/{comment_id} - Edit a comment
///
/// # Authentication
/// Requires `Authorization: Bearer <token>` naming an existing member, and only the comment's author may edit
///
/// # Returns
/// - `200 OK`: CommentDto after the update
/// - `403 Forbidden`: Comment written by another member
/// - `404 Not Found`: Comment missing or attached to another post
#[utoipa::path(
    put,
    path = "/api/posts/{post_id}/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID"),
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Comment updated", body = CommentDto),
        (status = 400, description = "Blank content", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Comment written by another member", body = ErrorDto),
        (status = 404, description = "Comment not found on this post", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    AuthMember(member_id): AuthMember,
    Path((post_id, comment_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let comment = CommentService::new(&state.db)
        .update(UpdateCommentParams::new(
            member_id,
            post_id,
            comment_id,
            payload.content,
        )?)
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// GET /api/posts/{post_id}/comments/{comment_id}/replies - List direct replies
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/comments/{comment_id}/replies",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID"),
        ("comment_id" = i32, Path, description = "Parent comment ID")
    ),
    responses(
        (status = 200, description = "Direct replies, oldest first", body = Vec<CommentDto>),
        (status = 404, description = "Comment not found on this post", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_replies(
    State(state): State<AppState>,
    Path((post_id, comment_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let replies = CommentService::new(&state.db)
        .list_replies(post_id, comment_id)
        .await?;

    let dto: Vec<CommentDto> = replies.into_iter().map(Comment::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// POST /api/posts/{post_id}/comments/{comment_id}/replies - Reply to a comment
///
/// # Authentication
/// Requires `Authorization: Bearer <token>` naming an existing member
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/comments/{comment_id}/replies",
    tag = COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID"),
        ("comment_id" = i32, Path, description = "Parent comment ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Reply created", body = CommentDto),
        (status = 400, description = "Blank content", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Parent comment not found on this post", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_reply(
    State(state): State<AppState>,
    AuthMember(member_id): AuthMember,
    Path((post_id, comment_id)): Path<(i32, i32)>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let reply = CommentService::new(&state.db)
        .reply(CreateCommentParams::reply(
            member_id,
            post_id,
            comment_id,
            payload.content,
        )?)
        .await?;

    let location = format!("/api/posts/{}/comments/{}", post_id, reply.id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(reply.into_dto())))
}
