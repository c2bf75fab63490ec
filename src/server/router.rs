use axum::{routing, Json, Router};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto, UpdateCommentDto},
        emoji::{CreateEmojiDto, EmojiDto},
        habit::{CreateHabitDto, HabitCheckDto, HabitDto, HabitListDto, UpdateHabitDto},
        member::{MemberDto, RegisterMemberDto, RegisteredMemberDto, UpdateMemberDto},
        post::{
            Category, CreatePostDto, PaginatedPostsDto, PostAuthorDto, PostDetailDto,
            PostSummaryDto, SearchType, UpdatePostDto,
        },
    },
    server::{
        controller::{comment, emoji, habit, member, post},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        member::register,
        member::get_profile,
        member::update_profile,
        member::delete_profile,
        habit::list_habits,
        habit::create_habit,
        habit::update_habit,
        habit::delete_habit,
        habit::check_habit,
        habit::uncheck_habit,
        post::list_posts,
        post::search_posts,
        post::create_post,
        post::get_post,
        post::update_post,
        post::delete_post,
        comment::list_comments,
        comment::create_comment,
        comment::update_comment,
        comment::list_replies,
        comment::create_reply,
        emoji::add_emoji,
        emoji::remove_emoji,
    ),
    components(schemas(
        ErrorDto,
        RegisterMemberDto,
        UpdateMemberDto,
        MemberDto,
        RegisteredMemberDto,
        CreateHabitDto,
        UpdateHabitDto,
        HabitDto,
        HabitListDto,
        HabitCheckDto,
        Category,
        SearchType,
        CreatePostDto,
        UpdatePostDto,
        PostSummaryDto,
        PaginatedPostsDto,
        PostAuthorDto,
        PostDetailDto,
        CreateCommentDto,
        UpdateCommentDto,
        CommentDto,
        CreateEmojiDto,
        EmojiDto,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "member", description = "Member registration and profile"),
        (name = "habit", description = "Habits and daily checks"),
        (name = "post", description = "Posts, listing and full-text search"),
        (name = "comment", description = "Comments and replies on posts"),
        (name = "emoji", description = "Emoji reactions on posts"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api-docs/openapi.json", routing::get(openapi_json))
        .route("/api/members", routing::post(member::register))
        .route(
            "/api/members/me",
            routing::get(member::get_profile)
                .put(member::update_profile)
                .delete(member::delete_profile),
        )
        .route("/api/habits", routing::get(habit::list_habits).post(habit::create_habit))
        .route(
            "/api/habits/{habit_id}",
            routing::put(habit::update_habit).delete(habit::delete_habit),
        )
        .route(
            "/api/habits/{habit_id}/check",
            routing::post(habit::check_habit).delete(habit::uncheck_habit),
        )
        .route("/api/posts", routing::get(post::list_posts).post(post::create_post))
        .route("/api/posts/search", routing::get(post::search_posts))
        .route(
            "/api/posts/{post_id}",
            routing::get(post::get_post)
                .put(post::update_post)
                .delete(post::delete_post),
        )
        .route(
            "/api/posts/{post_id}/comments",
            routing::get(comment::list_comments).post(comment::create_comment),
        )
        .route(
            "/api/posts/{post_id}/comments/{comment_id}",
            routing::put(comment::update_comment),
        )
        .route(
            "/api/posts/{post_id}/comments/{comment_id}/replies",
            routing::get(comment::list_replies).post(comment::create_reply),
        )
        .route("/api/posts/{post_id}/emojis", routing::post(emoji::add_emoji))
        .route(
            "/api/posts/{post_id}/emojis/{emoji_id}",
            routing::delete(emoji::remove_emoji),
        )
}
