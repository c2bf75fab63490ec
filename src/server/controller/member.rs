use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        member::{MemberDto, RegisterMemberDto, RegisteredMemberDto, UpdateMemberDto},
    },
    server::{
        controller::extract::{Json},
        error::AppError,
        middleware::auth::AuthMember,
        model::member::{RegisterMemberParams, UpdateMemberParams},
        service::member::MemberService,
        state::AppState,
    },
};

pub static MEMBER_TAG: &str = "member";

/// POST /api/members - Register a member
///
/// Creates the member and returns its profile with a signed access token. The
/// token is the only credential; there is no separate login.
///
/// # Returns
/// - `201 Created`: RegisteredMemberDto, `Location: /api/members/me`
/// - `400 Bad Request`: Blank or invalid nickname or email
/// - `409 Conflict`: Nickname or email already taken
#[utoipa::path(
    post,
    path = "/api/members",
    tag = MEMBER_TAG,
    request_body = RegisterMemberDto,
    responses(
        (status = 201, description = "Member registered, with an access token", body = RegisteredMemberDto),
        (status = 400, description = "Invalid nickname or email", body = ErrorDto),
        (status = 409, description = "Nickname or email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db)
        .register(RegisterMemberParams::from_dto(payload)?)
        .await?;

    let access_token = state.tokens.issue(member.id)?;

    let dto = RegisteredMemberDto {
        member: member.into_dto(),
        access_token,
        token_type: "Bearer".to_string(),
    };

    Ok((StatusCode::CREATED, [(LOCATION, "/api/members/me")], Json(dto)))
}

/// GET /api/members/me - Get the caller's profile
///
/// # Authentication
/// Requires `Authorization: Bearer <token>` naming an existing member
#[utoipa::path(
    get,
    path = "/api/members/me",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Profile of the authenticated member", body = MemberDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthMember(member_id): AuthMember,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db).get(member_id).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// PUT /api/members/me - Update the caller's profile
///
/// Only fields present in the body change. Resubmitting the current nickname is
/// accepted.
///
/// # Authentication
/// Requires `Authorization: Bearer <token>` naming an existing member
///
/// # Returns
/// - `200 OK`: MemberDto after the update
/// - `409 Conflict`: Nickname held by another member
#[utoipa::path(
    put,
    path = "/api/members/me",
    tag = MEMBER_TAG,
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Profile updated", body = MemberDto),
        (status = 400, description = "Invalid nickname", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 409, description = "Nickname held by another member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthMember(member_id): AuthMember,
    Json(payload): Json<UpdateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db)
        .update(UpdateMemberParams::from_dto(member_id, payload)?)
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// DELETE /api/members/me - Delete the caller's account
///
/// Deletes the member together with their habits, posts, comments and reactions.
///
/// # Authentication
/// Requires `Authorization: Bearer <token>` naming an existing member
#[utoipa::path(
    delete,
    path = "/api/members/me",
    tag = MEMBER_TAG,
    responses(
        (status = 204, description = "Member deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    AuthMember(member_id): AuthMember,
) -> Result<impl IntoResponse, AppError> {
    MemberService::new(&state.db).delete(member_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
