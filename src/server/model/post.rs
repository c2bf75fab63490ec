//! Post domain models, listing results and search parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::post::{
        Category, CreatePostDto, PaginatedPostsDto, PostAuthorDto, PostDetailDto, PostSummaryDto,
        SearchType, UpdatePostDto,
    },
    server::{
        error::AppError,
        model::{comment::Comment, emoji::Emoji, member::Member},
    },
};

/// Keywords shorter than this, after trimming, do not filter results.
pub const MIN_KEYWORD_CHARS: usize = 2;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

const MAX_ROW_OFFSET: u64 = i64::MAX as u64;

impl Category {
    /// Value stored in the `post.category` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Daily => "DAILY",
            Self::Study => "STUDY",
            Self::Exercise => "EXERCISE",
            Self::Hobby => "HOBBY",
            Self::Etc => "ETC",
        }
    }

    /// Parses a stored category. `ALL` is never stored so it is rejected here.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "DAILY" => Some(Self::Daily),
            "STUDY" => Some(Self::Study),
            "EXERCISE" => Some(Self::Exercise),
            "HOBBY" => Some(Self::Hobby),
            "ETC" => Some(Self::Etc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub member_id: i32,
    pub title: String,
    pub content: String,
    pub thumbnail_url: Option<String>,
    pub category: Category,
    pub views: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Converts a post entity, failing if the stored category is unknown.
    pub fn from_entity(entity: entity::post::Model) -> Result<Self, DbErr> {
        let category = Category::from_stored(&entity.category).ok_or_else(|| {
            DbErr::Custom(format!(
                "Post {} has unknown category '{}'",
                entity.id, entity.category
            ))
        })?;

        Ok(Self {
            id: entity.id,
            member_id: entity.member_id,
            title: entity.title,
            content: entity.content,
            thumbnail_url: entity.thumbnail_url,
            category,
            views: entity.views,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Post row in a listing with its child collections reduced to counts.
#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary {
    pub post: Post,
    pub comment_count: u64,
    pub emoji_count: u64,
}

impl PostSummary {
    pub fn into_dto(self) -> PostSummaryDto {
        PostSummaryDto {
            id: self.post.id,
            title: self.post.title,
            content: self.post.content,
            thumbnail_url: self.post.thumbnail_url,
            category: self.post.category,
            views: self.post.views,
            comment_count: self.comment_count,
            emoji_count: self.emoji_count,
            created_at: self.post.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedPosts {
    pub posts: Vec<PostSummary>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedPosts {
    pub fn into_dto(self) -> PaginatedPostsDto {
        PaginatedPostsDto {
            posts: self.posts.into_iter().map(PostSummary::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// A single post with its author, reactions and comments.
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub post: Post,
    pub author: Member,
    pub emojis: Vec<Emoji>,
    pub comments: Vec<Comment>,
}

impl PostDetail {
    pub fn into_dto(self) -> PostDetailDto {
        PostDetailDto {
            id: self.post.id,
            title: self.post.title,
            content: self.post.content,
            thumbnail_url: self.post.thumbnail_url,
            category: self.post.category,
            views: self.post.views,
            author: PostAuthorDto {
                id: self.author.id,
                nickname: self.author.nickname,
                profile_image_url: self.author.profile_image_url,
            },
            emojis: self.emojis.into_iter().map(Emoji::into_dto).collect(),
            comments: self.comments.into_iter().map(Comment::into_dto).collect(),
            created_at: self.post.created_at,
            updated_at: self.post.updated_at,
        }
    }
}

/// Filters for listing and searching posts.
///
/// Every filter is optional. The listing endpoint builds this without a keyword.
#[derive(Debug, Clone, Default)]
pub struct PostSearchParams {
    pub category: Option<Category>,
    pub search_type: Option<SearchType>,
    pub keyword: Option<String>,
    pub page: u64,
    pub per_page: u64,
}

impl PostSearchParams {
    /// Creates listing parameters without a keyword.
    ///
    /// `per_page` is clamped to `1..=MAX_PAGE_SIZE`. `page` is capped so the row
    /// offset `page * per_page` stays within `i64::MAX`, the largest offset the
    /// database drivers bind; such a page is simply empty.
    ///
    /// # Arguments
    /// - `category` - Category filter, `None` or `ALL` for every category
    /// - `page` - Zero-based page number
    /// - `per_page` - Requested page size
    ///
    /// # Returns
    /// - `PostSearchParams` - Parameters with no keyword or search type
    pub fn new(category: Option<Category>, page: u64, per_page: u64) -> Self {
        let per_page = per_page.clamp(1, MAX_PAGE_SIZE);

        Self {
            category,
            search_type: None,
            keyword: None,
            page: page.min(MAX_ROW_OFFSET / per_page),
            per_page,
        }
    }

    /// Adds the keyword filter used by the search endpoint.
    pub fn with_keyword(mut self, search_type: Option<SearchType>, keyword: Option<String>) -> Self {
        self.search_type = search_type;
        self.keyword = keyword;
        self
    }

    /// Category to filter on, `None` when absent or `ALL`.
    pub fn category_filter(&self) -> Option<Category> {
        self.category.filter(|c| *c != Category::All)
    }

    /// Trimmed keyword, or `None` when it is missing, blank or too short to search.
    pub fn usable_keyword(&self) -> Option<&str> {
        self.keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| k.chars().count() >= MIN_KEYWORD_CHARS)
    }
}

#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub member_id: i32,
    pub title: String,
    pub content: String,
    pub thumbnail_url: Option<String>,
    pub category: Category,
}

impl CreatePostParams {
    pub fn from_dto(member_id: i32, dto: CreatePostDto) -> Result<Self, AppError> {
        Ok(Self {
            member_id,
            title: require_text("title", &dto.title)?,
            content: require_text("content", &dto.content)?,
            thumbnail_url: dto.thumbnail_url,
            category: storable_category(dto.category)?,
        })
    }
}

/// Partial post update. `None` fields are left untouched.
#[derive(Debug, Clone)]
pub struct UpdatePostParams {
    pub member_id: i32,
    pub post_id: i32,
    pub title: Option<String>,
    pub content: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category: Option<Category>,
}

impl UpdatePostParams {
    pub fn from_dto(member_id: i32, post_id: i32, dto: UpdatePostDto) -> Result<Self, AppError> {
        Ok(Self {
            member_id,
            post_id,
            title: dto.title.map(|t| require_text("title", &t)).transpose()?,
            content: dto.content.map(|c| require_text("content", &c)).transpose()?,
            thumbnail_url: dto.thumbnail_url,
            category: dto.category.map(storable_category).transpose()?,
        })
    }
}

fn require_text(field: &str, value: &str) -> Result<String, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("Post {} must not be blank", field)));
    }

    Ok(value.to_string())
}

fn storable_category(category: Category) -> Result<Category, AppError> {
    if category == Category::All {
        return Err(AppError::BadRequest(
            "ALL is a filter and cannot be used as a post category".to_string(),
        ));
    }

    Ok(category)
}
