use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        post::{
            Category, CreatePostDto, PaginatedPostsDto, PostDetailDto, PostSummaryDto,
            SearchType, UpdatePostDto,
        },
    },
    server::{
        controller::{
            extract::{Json, Path, Query},
            param::{PostListParam, PostSearchParam},
        },
        error::AppError,
        middleware::auth::AuthMember,
        model::post::{CreatePostParams, PostSearchParams, PostSummary, UpdatePostParams},
        service::post::PostService,
        state::AppState,
    },
};

pub static POST_TAG: &str = "post";

/// GET /api/posts - List posts, newest first
///
/// `category=ALL` and an absent category both list every category.
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = POST_TAG,
    params(
        ("category" = Option<Category>, Query, description = "Category filter, ALL or absent for every category"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Posts, newest first", body = PaginatedPostsDto),
        (status = 400, description = "Unknown category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<PostListParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = PostService::new(&state.db)
        .search(PostSearchParams::new(query.category, query.page, query.entries))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// GET /api/posts/search - Full-text search over posts
///
/// Keywords shorter than two characters are ignored rather than rejected.
#[utoipa::path(
    get,
    path = "/api/posts/search",
    tag = POST_TAG,
    params(
        ("category" = Option<Category>, Query, description = "Category filter, ALL or absent for every category"),
        ("search_type" = Option<SearchType>, Query, description = "Field to search, both when absent"),
        ("keyword" = Option<String>, Query, description = "Full-text keyword"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Matching posts, newest first", body = PaginatedPostsDto),
        (status = 400, description = "Unknown category or search type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_posts(
    State(state): State<AppState>,
    Query(query): Query<PostSearchParam>,
) -> Result<impl IntoResponse, AppError> {
    let params = PostSearchParams::new(query.category, query.page, query.entries)
        .with_keyword(query.search_type, query.keyword);

    let page = PostService::new(&state.db).search(params).await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// POST /api/posts - Create a post
///
/// # Authentication
/// Requires `Authorization: Bearer <token>` naming an existing member
///
/// # Returns
/// - `201 Created`: PostSummaryDto with zero counts, `Location` of the post
/// - `400 Bad Request`: Blank title or content, or category `ALL`
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = POST_TAG,
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = PostSummaryDto),
        (status = 400, description = "Blank title or content, or category ALL", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_post(
    State(state): State<AppState>,
    AuthMember(member_id): AuthMember,
    Json(payload): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let post = PostService::new(&state.db)
        .create(CreatePostParams::from_dto(member_id, payload)?)
        .await?;

    let location = format!("/api/posts/{}", post.id);

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(
            PostSummary {
                post,
                comment_count: 0,
                emoji_count: 0,
            }
            .into_dto(),
        ),
    ))
}

/// GET /api/posts/{post_id} - Read a post
///
/// Each read counts as a view; the returned count includes this one.
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post with author, reactions and comments", body = PostDetailDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let post = PostService::new(&state.db).read(post_id).await?;

    Ok((StatusCode::OK, Json(post.into_dto())))
}

/// PUT /api/posts/{post_id} - Update a post
///
/// # Authentication
/// Requires `Authorization: Bearer <token>` naming an existing member, and only the author may update
#[utoipa::path(
    put,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Post updated", body = PostSummaryDto),
        (status = 400, description = "Blank title or content, or category ALL", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Post written by another member", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_post(
    State(state): State<AppState>,
    AuthMember(member_id): AuthMember,
    Path(post_id): Path<i32>,
    Json(payload): Json<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PostService::new(&state.db);

    let post = service
        .update(UpdatePostParams::from_dto(member_id, post_id, payload)?)
        .await?;
    let summary = service.summarize(post).await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

/// DELETE /api/posts/{post_id} - Delete a post with its comments and reactions
///
/// # Authentication
/// Requires `Authorization: Bearer <token>` naming an existing member, and only the author may delete
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}",
    tag = POST_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 204, description = "Post deleted with its comments and reactions"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Post written by another member", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    AuthMember(member_id): AuthMember,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    PostService::new(&state.db).delete(member_id, post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
