//! Comment data repository.
//!
//! Replies are comments whose `parent_id` points at another comment of the same post.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::comment::{Comment, CreateCommentParams};

/// Repository for comment and reply rows.
pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    /// Creates a new CommentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `CommentRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a comment, or a reply when `params.parent_id` is set.
    ///
    /// The caller has already checked that the post exists and that a parent belongs
    /// to the same post.
    ///
    /// # Arguments
    /// - `params` - Author ID, post ID, optional parent comment ID and trimmed content
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(DbErr)` - Insert failed, e.g. the post or parent no longer exists
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let now = Utc::now();
        let entity = entity::comment::ActiveModel {
            post_id: ActiveValue::Set(params.post_id),
            member_id: ActiveValue::Set(params.member_id),
            parent_id: ActiveValue::Set(params.parent_id),
            content: ActiveValue::Set(params.content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    /// Finds a comment by ID regardless of its post.
    ///
    /// # Arguments
    /// - `id` - Comment ID
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - Comment found
    /// - `Ok(None)` - No comment with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let entity = entity::prelude::Comment::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Comment::from_entity))
    }

    /// Lists every comment of a post, replies included, in creation order.
    ///
    /// # Arguments
    /// - `post_id` - Post ID
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments oldest first, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_post(&self, post_id: i32) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Lists the direct replies to a comment, in creation order.
    ///
    /// Replies to those replies are not included.
    ///
    /// # Arguments
    /// - `parent_id` - Comment being replied to
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Replies oldest first, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_replies(&self, parent_id: i32) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ParentId.eq(parent_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Replaces the content of a comment.
    ///
    /// Ownership and post membership are checked by the caller.
    ///
    /// # Arguments
    /// - `id` - Comment ID
    /// - `content` - New trimmed content
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - The comment after the update
    /// - `Ok(None)` - No comment with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_content(&self, id: i32, content: String) -> Result<Option<Comment>, DbErr> {
        let Some(entity) = entity::prelude::Comment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.content = ActiveValue::Set(content);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Comment::from_entity(updated)))
    }
}
