use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{comment::CommentDto, emoji::EmojiDto};

/// Board category of a post.
///
/// `All` is only meaningful as a filter and is never stored on a post.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Hash, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    All,
    Daily,
    Study,
    Exercise,
    Hobby,
    Etc,
}

/// Which post field a keyword search looks at. Absent means both.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SearchType {
    Title,
    Content,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePostDto {
    pub title: String,
    pub content: String,
    pub thumbnail_url: Option<String>,
    pub category: Category,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdatePostDto {
    pub title: Option<String>,
    pub content: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category: Option<Category>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PostSummaryDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub thumbnail_url: Option<String>,
    pub category: Category,
    pub views: i64,
    pub comment_count: u64,
    pub emoji_count: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedPostsDto {
    pub posts: Vec<PostSummaryDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PostAuthorDto {
    pub id: i32,
    pub nickname: String,
    pub profile_image_url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PostDetailDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub thumbnail_url: Option<String>,
    pub category: Category,
    pub views: i64,
    pub author: PostAuthorDto,
    pub emojis: Vec<EmojiDto>,
    pub comments: Vec<CommentDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
