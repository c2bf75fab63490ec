use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        emoji::{CreateEmojiDto, EmojiDto},
    },
    server::{
        controller::extract::{Json, Path},
        error::AppError,
        middleware::auth::AuthMember,
        model::emoji::AddEmojiParams,
        service::emoji::EmojiService,
        state::AppState,
    },
};

pub static EMOJI_TAG: &str = "emoji";

/// POST /api/posts/{post_id}/emojis - React to a post
///
/// # Authentication
/// Requires `Authorization: Bearer <token>` naming an existing member
///
/// # Returns
/// - `201 Created`: EmojiDto
/// - `409 Conflict`: Caller already left this kind on the post
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/emojis",
    tag = EMOJI_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = CreateEmojiDto,
    responses(
        (status = 201, description = "Reaction added", body = EmojiDto),
        (status = 400, description = "Blank or overlong kind", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 409, description = "Member already reacted with this kind", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_emoji(
    State(state): State<AppState>,
    AuthMember(member_id): AuthMember,
    Path(post_id): Path<i32>,
    Json(payload): Json<CreateEmojiDto>,
) -> Result<impl IntoResponse, AppError> {
    let emoji = EmojiService::new(&state.db)
        .add(AddEmojiParams::new(member_id, post_id, &payload.kind)?)
        .await?;

    let location = format!("/api/posts/{}/emojis/{}", post_id, emoji.id);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(emoji.into_dto())))
}

/// DELETE /api/posts/{post_id}/emojis/{emoji_id} - Remove the caller's reaction
///
/// # Authentication
/// Requires `Authorization: Bearer <token>` naming an existing member
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}/emojis/{emoji_id}",
    tag = EMOJI_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID"),
        ("emoji_id" = i32, Path, description = "Emoji ID")
    ),
    responses(
        (status = 204, description = "Reaction removed"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Reaction added by another member", body = ErrorDto),
        (status = 404, description = "Reaction not found on this post", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn remove_emoji(
    State(state): State<AppState>,
    AuthMember(member_id): AuthMember,
    Path((post_id, emoji_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    EmojiService::new(&state.db)
        .remove(member_id, post_id, emoji_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
