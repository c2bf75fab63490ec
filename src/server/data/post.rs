//! Post data repository and search query composition.
//!
//! Listing and search share one query: an unconditional `SELECT` over `post` with
//! predicates appended only for the filters that are present, always ordered by
//! creation time descending. Keyword predicates use the full-text index of the
//! connected backend and bind the keyword as a parameter.

use chrono::Utc;
use migration::POST_FTS_TABLE;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseBackend,
    DbErr, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::{
    model::post::{Category, SearchType},
    server::model::{
        member::Member,
        post::{CreatePostParams, Post, PostSearchParams, PostSummary, UpdatePostParams},
    },
};

/// Repository for post rows and the listing query.
pub struct PostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostRepository<'a, C> {
    /// Creates a new PostRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `PostRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a post with zero views.
    ///
    /// `created_at` and `updated_at` are both set to the current time. The category is
    /// stored as its uppercase name.
    ///
    /// # Arguments
    /// - `params` - Author ID, title, content, optional thumbnail and a concrete category
    ///
    /// # Returns
    /// - `Ok(Post)` - The created post
    /// - `Err(DbErr)` - Insert failed, e.g. the author no longer exists
    pub async fn create(&self, params: CreatePostParams) -> Result<Post, DbErr> {
        let now = Utc::now();
        let entity = entity::post::ActiveModel {
            member_id: ActiveValue::Set(params.member_id),
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            thumbnail_url: ActiveValue::Set(params.thumbnail_url),
            category: ActiveValue::Set(params.category.as_str().to_string()),
            views: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Post::from_entity(entity)
    }

    /// Finds a post by ID.
    ///
    /// # Arguments
    /// - `id` - Post ID
    ///
    /// # Returns
    /// - `Ok(Some(Post))` - Post found
    /// - `Ok(None)` - No post with that ID
    /// - `Err(DbErr)` - Database error, or a stored category that is not recognised
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Post>, DbErr> {
        entity::prelude::Post::find()
            .filter(Condition::all().add_option(id_eq(Some(id))))
            .one(self.db)
            .await?
            .map(Post::from_entity)
            .transpose()
    }

    /// Loads a post together with its author in one joined query.
    ///
    /// # Arguments
    /// - `id` - Post ID
    ///
    /// # Returns
    /// - `Ok(Some((post, author)))` - Post and author found
    /// - `Ok(None)` - No post with that ID
    /// - `Err(DbErr::RecordNotFound)` - Post exists without its author row
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_author(&self, id: i32) -> Result<Option<(Post, Member)>, DbErr> {
        let Some((post, author)) = entity::prelude::Post::find()
            .filter(Condition::all().add_option(id_eq(Some(id))))
            .find_also_related(entity::prelude::Member)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let author = author.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Author {} of post {} not found", post.member_id, id))
        })?;

        Ok(Some((Post::from_entity(post)?, Member::from_entity(author))))
    }

    /// Adds one to the view counter in a single `UPDATE`.
    ///
    /// The increment is computed by the database, so concurrent reads never lose a view.
    ///
    /// # Arguments
    /// - `id` - Post ID
    ///
    /// # Returns
    /// - `Ok(true)` - Counter incremented
    /// - `Ok(false)` - No post with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn increment_views(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Post::update_many()
            .col_expr(
                entity::post::Column::Views,
                Expr::col(entity::post::Column::Views).add(1),
            )
            .filter(entity::post::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Applies the fields present in `params` to the post.
    ///
    /// Ownership is checked by the caller. Absent fields keep their stored value;
    /// `updated_at` is always refreshed.
    ///
    /// # Arguments
    /// - `params` - Post ID plus the optional title, content, thumbnail and category
    ///
    /// # Returns
    /// - `Ok(Some(Post))` - The post after the update
    /// - `Ok(None)` - No post with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, params: UpdatePostParams) -> Result<Option<Post>, DbErr> {
        let Some(entity) = entity::prelude::Post::find_by_id(params.post_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(content) = params.content {
            active.content = ActiveValue::Set(content);
        }
        if let Some(url) = params.thumbnail_url {
            active.thumbnail_url = ActiveValue::Set(Some(url));
        }
        if let Some(category) = params.category {
            active.category = ActiveValue::Set(category.as_str().to_string());
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Post::from_entity(updated).map(Some)
    }

    /// Deletes a post; comments and reactions cascade.
    ///
    /// # Arguments
    /// - `id` - Post ID
    ///
    /// # Returns
    /// - `Ok(true)` - Post deleted
    /// - `Ok(false)` - No post with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Post::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Lists posts matching the filters in `params`, newest first.
    ///
    /// Ties on `created_at` are broken by descending ID. Counts for the returned page
    /// are loaded with one grouped query per relation rather than per post.
    ///
    /// # Arguments
    /// - `params` - Category, keyword and search type filters plus page and page size
    ///
    /// # Returns
    /// - `Ok((posts, total))` - The requested page with comment and emoji counts, and
    ///   the number of posts matching the filters across all pages
    /// - `Err(DbErr)` - Query failed
    pub async fn search(&self, params: &PostSearchParams) -> Result<(Vec<PostSummary>, u64), DbErr> {
        let condition = search_condition(self.db.get_database_backend(), params);

        let paginator = entity::prelude::Post::find()
            .filter(condition)
            .distinct()
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_desc(entity::post::Column::Id)
            .paginate(self.db, params.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(params.page).await?;

        let ids: Vec<i32> = entities.iter().map(|p| p.id).collect();
        let comment_counts = self.comment_counts(&ids).await?;
        let emoji_counts = self.emoji_counts(&ids).await?;

        let posts = entities
            .into_iter()
            .map(|entity| {
                let id = entity.id;
                Ok(PostSummary {
                    post: Post::from_entity(entity)?,
                    comment_count: comment_counts.get(&id).copied().unwrap_or(0),
                    emoji_count: emoji_counts.get(&id).copied().unwrap_or(0),
                })
            })
            .collect::<Result<Vec<_>, DbErr>>()?;

        Ok((posts, total))
    }

    /// Returns the comment and emoji counts of a single post.
    ///
    /// # Arguments
    /// - `post_id` - Post ID
    ///
    /// # Returns
    /// - `Ok((comments, emojis))` - Comment count including replies, and reaction count
    /// - `Err(DbErr)` - Database error during query
    pub async fn counts(&self, post_id: i32) -> Result<(u64, u64), DbErr> {
        let comments = self.comment_counts(&[post_id]).await?;
        let emojis = self.emoji_counts(&[post_id]).await?;

        Ok((
            comments.get(&post_id).copied().unwrap_or(0),
            emojis.get(&post_id).copied().unwrap_or(0),
        ))
    }

    /// Number of comments (replies included) per post id.
    async fn comment_counts(&self, post_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64)> = entity::prelude::Comment::find()
            .select_only()
            .column(entity::comment::Column::PostId)
            .column_as(Expr::from(Func::count(Expr::col(entity::comment::Column::Id))), "count")
            .filter(entity::comment::Column::PostId.is_in(post_ids.iter().copied()))
            .group_by(entity::comment::Column::PostId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|(id, n)| (id, n as u64)).collect())
    }

    /// Number of emoji reactions per post id.
    async fn emoji_counts(&self, post_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64)> = entity::prelude::Emoji::find()
            .select_only()
            .column(entity::emoji::Column::PostId)
            .column_as(Expr::from(Func::count(Expr::col(entity::emoji::Column::Id))), "count")
            .filter(entity::emoji::Column::PostId.is_in(post_ids.iter().copied()))
            .group_by(entity::emoji::Column::PostId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|(id, n)| (id, n as u64)).collect())
    }
}

/// Combines the category and keyword filters; absent filters add nothing.
pub(crate) fn search_condition(backend: DatabaseBackend, params: &PostSearchParams) -> Condition {
    Condition::all()
        .add_option(category_eq(params.category_filter()))
        .add_option(
            params
                .usable_keyword()
                .map(|keyword| keyword_match(backend, params.search_type, keyword)),
        )
}

/// No id means no constraint.
fn id_eq(id: Option<i32>) -> Option<Condition> {
    id.map(|id| Condition::all().add(entity::post::Column::Id.eq(id)))
}

fn category_eq(category: Option<Category>) -> Option<Condition> {
    category.map(|c| Condition::all().add(entity::post::Column::Category.eq(c.as_str())))
}

/// Relevance predicate for the searched fields: title, content, or either.
fn keyword_match(
    backend: DatabaseBackend,
    search_type: Option<SearchType>,
    keyword: &str,
) -> Condition {
    match search_type {
        Some(SearchType::Title) => {
            Condition::all().add(relevance(backend, SearchField::Title, keyword))
        }
        Some(SearchType::Content) => {
            Condition::all().add(relevance(backend, SearchField::Content, keyword))
        }
        None => Condition::any()
            .add(relevance(backend, SearchField::Title, keyword))
            .add(relevance(backend, SearchField::Content, keyword)),
    }
}

#[derive(Clone, Copy)]
enum SearchField {
    Title,
    Content,
}

impl SearchField {
    fn column(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
        }
    }
}

/// `relevance(field, keyword) > 0` in the dialect of `backend`.
fn relevance(backend: DatabaseBackend, field: SearchField, keyword: &str) -> SimpleExpr {
    match backend {
        DatabaseBackend::Postgres => Expr::cust_with_values(
            match field {
                SearchField::Title => {
                    r#"ts_rank(to_tsvector('simple', "post"."title"), plainto_tsquery('simple', ?)) > 0"#
                }
                SearchField::Content => {
                    r#"ts_rank(to_tsvector('simple', "post"."content"), plainto_tsquery('simple', ?)) > 0"#
                }
            },
            [keyword.to_string()],
        ),
        DatabaseBackend::MySql => Expr::cust_with_values(
            match field {
                SearchField::Title => {
                    "MATCH(`post`.`title`) AGAINST (? IN NATURAL LANGUAGE MODE) > 0"
                }
                SearchField::Content => {
                    "MATCH(`post`.`content`) AGAINST (? IN NATURAL LANGUAGE MODE) > 0"
                }
            },
            [keyword.to_string()],
        ),
        _ => Expr::cust_with_values(
            format!(
                r#"(SELECT -bm25("{fts}") FROM "{fts}" WHERE "{fts}" MATCH ? AND "{fts}"."rowid" = "post"."id") > 0"#,
                fts = POST_FTS_TABLE
            ),
            [fts5_query(field, keyword)],
        ),
    }
}

/// FTS5 query matching any whitespace-separated term of `keyword` in `field`.
///
/// Each term is quoted so FTS5 operators in user input are matched literally.
fn fts5_query(field: SearchField, keyword: &str) -> String {
    let terms: Vec<String> = keyword
        .split_whitespace()
        .map(|term| format!("\"{}\"", term.replace('"', "\"\"")))
        .collect();

    format!("{} : ({})", field.column(), terms.join(" OR "))
}
