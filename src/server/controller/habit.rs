use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        habit::{CreateHabitDto, HabitCheckDto, HabitDto, HabitListDto, UpdateHabitDto},
    },
    server::{
        controller::{
            extract::{Json, Path, Query},
            param::DateParam,
        },
        error::AppError,
        middleware::auth::AuthMember,
        model::habit::{CreateHabitParams, HabitStatus, UpdateHabitParams},
        service::habit::HabitService,
        state::AppState,
        util::date::today_at_offset,
    },
};

pub static HABIT_TAG: &str = "habit";

/// GET /api/habits - List the caller's habits with check state
///
/// `?date=YYYY-MM-DD` selects the day; absent means today at the configured offset.
///
/// # Authentication
/// Requires `Authorization: Bearer <token>` naming an existing member
#[utoipa::path(
    get,
    path = "/api/habits",
    tag = HABIT_TAG,
    params(
        ("date" = Option<String>, Query, description = "Day to report check status for, YYYY-MM-DD (default: today)")
    ),
    responses(
        (status = 200, description = "Member's habits with their check status", body = HabitListDto),
        (status = 400, description = "Malformed date", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_habits(
    State(state): State<AppState>,
    AuthMember(member_id): AuthMember,
    Query(query): Query<DateParam>,
) -> Result<impl IntoResponse, AppError> {
    let date = query.or_today(state.utc_offset_hours);

    let habits = HabitService::new(&state.db)
        .list_for_date(member_id, date)
        .await?;

    let dto = HabitListDto {
        date,
        habits: habits.into_iter().map(HabitStatus::into_dto).collect(),
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// POST /api/habits - Create a habit
///
/// # Authentication
/// Requires `Authorization: Bearer <token>` naming an existing member
///
/// # Returns
/// - `201 Created`: HabitDto, unchecked, with `Location` of the habit
#[utoipa::path(
    post,
    path = "/api/habits",
    tag = HABIT_TAG,
    request_body = CreateHabitDto,
    responses(
        (status = 201, description = "Habit created", body = HabitDto),
        (status = 400, description = "Blank title", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_habit(
    State(state): State<AppState>,
    AuthMember(member_id): AuthMember,
    Json(payload): Json<CreateHabitDto>,
) -> Result<impl IntoResponse, AppError> {
    let habit = HabitService::new(&state.db)
        .create(CreateHabitParams::from_dto(member_id, payload)?)
        .await?;

    let location = format!("/api/habits/{}", habit.id);

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(habit.into_dto(false)),
    ))
}

/// PUT /api/habits/{habit_id} - Update an owned habit
///
/// The response reports whether the habit is checked today.
///
/// # Authentication
/// Requires `Authorization: Bearer <token>` naming an existing member
#[utoipa::path(
    put,
    path = "/api/habits/{habit_id}",
    tag = HABIT_TAG,
    params(
        ("habit_id" = i32, Path, description = "Habit ID")
    ),
    request_body = UpdateHabitDto,
    responses(
        (status = 200, description = "Habit updated, `checked` reflects today", body = HabitDto),
        (status = 400, description = "Blank title", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Habit not found or owned by another member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_habit(
    State(state): State<AppState>,
    AuthMember(member_id): AuthMember,
    Path(habit_id): Path<i32>,
    Json(payload): Json<UpdateHabitDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = HabitService::new(&state.db);

    let habit = service
        .update(UpdateHabitParams::from_dto(member_id, habit_id, payload)?)
        .await?;
    let today = today_at_offset(state.utc_offset_hours);
    let checked = service.is_checked(habit.id, today).await?;

    Ok((StatusCode::OK, Json(habit.into_dto(checked))))
}

/// DELETE /api/habits/{habit_id} - Delete an owned habit and its checks
///
/// # Authentication
/// Requires `Authorization: Bearer <token>` naming an existing member
#[utoipa::path(
    delete,
    path = "/api/habits/{habit_id}",
    tag = HABIT_TAG,
    params(
        ("habit_id" = i32, Path, description = "Habit ID")
    ),
    responses(
        (status = 204, description = "Habit deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Habit not found or owned by another member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_habit(
    State(state): State<AppState>,
    AuthMember(member_id): AuthMember,
    Path(habit_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    HabitService::new(&state.db)
        .delete(member_id, habit_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/habits/{habit_id}/check - Mark a habit done for a day
///
/// # Authentication
/// Requires `Authorization: Bearer <token>` naming an existing member
///
/// # Returns
/// - `201 Created`: HabitCheckDto
/// - `404 Not Found`: Habit missing or owned by another member
/// - `409 Conflict`: Already checked on that date
#[utoipa::path(
    post,
    path = "/api/habits/{habit_id}/check",
    tag = HABIT_TAG,
    params(
        ("habit_id" = i32, Path, description = "Habit ID"),
        ("date" = Option<String>, Query, description = "Day to check, YYYY-MM-DD (default: today)")
    ),
    responses(
        (status = 201, description = "Habit checked", body = HabitCheckDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Habit not found or owned by another member", body = ErrorDto),
        (status = 409, description = "Habit already checked on that day", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn check_habit(
    State(state): State<AppState>,
    AuthMember(member_id): AuthMember,
    Path(habit_id): Path<i32>,
    Query(query): Query<DateParam>,
) -> Result<impl IntoResponse, AppError> {
    let date = query.or_today(state.utc_offset_hours);

    let check = HabitService::new(&state.db)
        .check(member_id, habit_id, date)
        .await?;

    let location = format!("/api/habits/{}/check?date={}", habit_id, date);

    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(check.into_dto())))
}

/// DELETE /api/habits/{habit_id}/check - Remove the mark for a day
///
/// # Authentication
/// Requires `Authorization: Bearer <token>` naming an existing member
#[utoipa::path(
    delete,
    path = "/api/habits/{habit_id}/check",
    tag = HABIT_TAG,
    params(
        ("habit_id" = i32, Path, description = "Habit ID"),
        ("date" = Option<String>, Query, description = "Day to uncheck, YYYY-MM-DD (default: today)")
    ),
    responses(
        (status = 204, description = "Habit unchecked"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Habit not found or not checked on that day", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn uncheck_habit(
    State(state): State<AppState>,
    AuthMember(member_id): AuthMember,
    Path(habit_id): Path<i32>,
    Query(query): Query<DateParam>,
) -> Result<impl IntoResponse, AppError> {
    let date = query.or_today(state.utc_offset_hours);

    HabitService::new(&state.db)
        .uncheck(member_id, habit_id, date)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
