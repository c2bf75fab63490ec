use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{emoji::EmojiRepository, post::PostRepository},
    error::{is_unique_violation, AppError},
    model::emoji::{AddEmojiParams, Emoji},
    service::post::post_not_found,
};

/// Service for emoji reactions on posts.
pub struct EmojiService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmojiService<'a> {
    /// Creates a new EmojiService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EmojiService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a reaction. Each member can use a kind at most once per post.
    ///
    /// The existence check and insert share a transaction; a concurrent insert that
    /// wins on the unique index is reported the same way as the check.
    ///
    /// # Arguments
    /// - `params` - Member ID, post ID and normalised emoji kind
    ///
    /// # Returns
    /// - `Ok(Emoji)` - The stored reaction
    /// - `Err(AppError::NotFound)` - No post with that ID
    /// - `Err(AppError::Conflict)` - Member already left this kind on the post
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add(&self, params: AddEmojiParams) -> Result<Emoji, AppError> {
        let txn = self.db.begin().await?;

        if PostRepository::new(&txn)
            .find_by_id(params.post_id)
            .await?
            .is_none()
        {
            return Err(post_not_found(params.post_id));
        }

        let repo = EmojiRepository::new(&txn);
        let conflict = || {
            AppError::Conflict(format!(
                "Already reacted with {} to post {}",
                params.kind, params.post_id
            ))
        };

        if repo
            .exists(params.post_id, params.member_id, &params.kind)
            .await?
        {
            return Err(conflict());
        }

        let emoji = match repo.create(params.clone()).await {
            Ok(emoji) => emoji,
            Err(err) if is_unique_violation(&err) => return Err(conflict()),
            Err(err) => return Err(err.into()),
        };

        txn.commit().await?;

        Ok(emoji)
    }

    /// Removes a reaction. Only the member who added it may remove it.
    ///
    /// # Arguments
    /// - `member_id` - Acting member
    /// - `post_id` - Post the reaction is expected on
    /// - `emoji_id` - Reaction ID
    ///
    /// # Returns
    /// - `Ok(())` - Reaction removed
    /// - `Err(AppError::NotFound)` - Reaction missing or attached to another post
    /// - `Err(AppError::Forbidden)` - Reaction left by another member
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove(&self, member_id: i32, post_id: i32, emoji_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = EmojiRepository::new(&txn);

        let emoji = repo
            .find_on_post(post_id, emoji_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Emoji {} not found", emoji_id)))?;

        if emoji.member_id != member_id {
            return Err(AppError::Forbidden(format!(
                "Emoji {} belongs to another member",
                emoji_id
            )));
        }

        repo.delete(emoji_id).await?;
        txn.commit().await?;

        Ok(())
    }
}
