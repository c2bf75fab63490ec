//! Emoji reaction data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::emoji::{AddEmojiParams, Emoji};

/// Repository for emoji reaction rows.
pub struct EmojiRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmojiRepository<'a, C> {
    /// Creates a new EmojiRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `EmojiRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a reaction.
    ///
    /// # Arguments
    /// - `params` - Member ID, post ID and normalised emoji kind
    ///
    /// # Returns
    /// - `Ok(Emoji)` - The stored reaction
    /// - `Err(DbErr)` - Insert failed, including a unique violation when the member already
    ///   left this kind on the post
    pub async fn create(&self, params: AddEmojiParams) -> Result<Emoji, DbErr> {
        let entity = entity::emoji::ActiveModel {
            post_id: ActiveValue::Set(params.post_id),
            member_id: ActiveValue::Set(params.member_id),
            kind: ActiveValue::Set(params.kind),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Emoji::from_entity(entity))
    }

    /// Returns whether a member already left a kind of reaction on a post.
    ///
    /// # Arguments
    /// - `post_id` - Post ID
    /// - `member_id` - Reacting member
    /// - `kind` - Normalised emoji kind
    ///
    /// # Returns
    /// - `Ok(true)` - Matching reaction exists
    /// - `Ok(false)` - No matching reaction
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists(&self, post_id: i32, member_id: i32, kind: &str) -> Result<bool, DbErr> {
        let entity = entity::prelude::Emoji::find()
            .filter(entity::emoji::Column::PostId.eq(post_id))
            .filter(entity::emoji::Column::MemberId.eq(member_id))
            .filter(entity::emoji::Column::Kind.eq(kind))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// Finds a reaction only if it is attached to `post_id`.
    ///
    /// # Arguments
    /// - `post_id` - Post the reaction is expected on
    /// - `emoji_id` - Reaction ID
    ///
    /// # Returns
    /// - `Ok(Some(Emoji))` - Reaction found on that post
    /// - `Ok(None)` - Reaction missing or attached to another post
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_on_post(&self, post_id: i32, emoji_id: i32) -> Result<Option<Emoji>, DbErr> {
        let entity = entity::prelude::Emoji::find_by_id(emoji_id)
            .filter(entity::emoji::Column::PostId.eq(post_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Emoji::from_entity))
    }

    /// Lists all reactions of a post, oldest first.
    ///
    /// # Arguments
    /// - `post_id` - Post ID
    ///
    /// # Returns
    /// - `Ok(Vec<Emoji>)` - Reactions, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_post(&self, post_id: i32) -> Result<Vec<Emoji>, DbErr> {
        let entities = entity::prelude::Emoji::find()
            .filter(entity::emoji::Column::PostId.eq(post_id))
            .order_by_asc(entity::emoji::Column::CreatedAt)
            .order_by_asc(entity::emoji::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Emoji::from_entity).collect())
    }

    /// Deletes a reaction by ID.
    ///
    /// # Arguments
    /// - `emoji_id` - Reaction ID
    ///
    /// # Returns
    /// - `Ok(true)` - Reaction deleted
    /// - `Ok(false)` - No reaction with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, emoji_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Emoji::delete_by_id(emoji_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
