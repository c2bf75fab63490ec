use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{comment::CommentRepository, post::PostRepository},
    error::AppError,
    model::comment::{Comment, CreateCommentParams, UpdateCommentParams},
    service::post::post_not_found,
};

/// Service for comments and replies on posts.
///
/// Writes run in a transaction so the post and parent checks see the same state
/// as the insert or update.
pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    /// Creates a new CommentService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CommentService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every comment of a post, replies included, oldest first.
    ///
    /// # Arguments
    /// - `post_id` - Post ID
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments of the post, possibly empty
    /// - `Err(AppError::NotFound)` - No post with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(&self, post_id: i32) -> Result<Vec<Comment>, AppError> {
        ensure_post_exists(self.db, post_id).await?;

        Ok(CommentRepository::new(self.db).find_by_post(post_id).await?)
    }

    /// Adds a top-level comment to a post.
    ///
    /// # Arguments
    /// - `params` - Author ID, post ID and trimmed content, with no parent
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(AppError::NotFound)` - No post with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        let txn = self.db.begin().await?;

        ensure_post_exists(&txn, params.post_id).await?;
        let comment = CommentRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::info!(
            "Member {} commented {} on post {}",
            comment.member_id,
            comment.id,
            comment.post_id
        );

        Ok(comment)
    }

    /// Replaces a comment's content.
    ///
    /// The comment must belong to `params.post_id` and to the acting member.
    ///
    /// # Arguments
    /// - `params` - Acting member, post ID, comment ID and new content
    ///
    /// # Returns
    /// - `Ok(Comment)` - The comment after the update
    /// - `Err(AppError::NotFound)` - Comment missing or attached to another post
    /// - `Err(AppError::Forbidden)` - Comment written by another member
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, params: UpdateCommentParams) -> Result<Comment, AppError> {
        let txn = self.db.begin().await?;
        let repo = CommentRepository::new(&txn);

        let comment = find_on_post(&repo, params.post_id, params.comment_id).await?;
        if comment.member_id != params.member_id {
            return Err(AppError::Forbidden(format!(
                "Comment {} belongs to another member",
                comment.id
            )));
        }

        let updated = repo
            .update_content(params.comment_id, params.content)
            .await?
            .ok_or_else(|| comment_not_found(params.comment_id))?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Lists the direct replies to a comment of the given post, oldest first.
    ///
    /// # Arguments
    /// - `post_id` - Post the comment is expected on
    /// - `comment_id` - Comment whose replies are listed
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Replies, possibly empty
    /// - `Err(AppError::NotFound)` - Comment missing or attached to another post
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list_replies(&self, post_id: i32, comment_id: i32) -> Result<Vec<Comment>, AppError> {
        let repo = CommentRepository::new(self.db);

        find_on_post(&repo, post_id, comment_id).await?;

        Ok(repo.find_replies(comment_id).await?)
    }

    /// Replies to an existing comment of the same post.
    ///
    /// Replies may target other replies; depth is not limited.
    ///
    /// # Arguments
    /// - `params` - Author ID, post ID, parent comment ID and trimmed content
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created reply
    /// - `Err(AppError::BadRequest)` - `params` carries no parent comment
    /// - `Err(AppError::NotFound)` - Parent missing or attached to another post
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn reply(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        let Some(parent_id) = params.parent_id else {
            return Err(AppError::BadRequest("Reply needs a parent comment".to_string()));
        };

        let txn = self.db.begin().await?;
        let repo = CommentRepository::new(&txn);

        find_on_post(&repo, params.post_id, parent_id).await?;
        let reply = repo.create(params).await?;

        txn.commit().await?;

        tracing::info!("Member {} replied {} to comment {}", reply.member_id, reply.id, parent_id);

        Ok(reply)
    }
}

async fn ensure_post_exists<C: ConnectionTrait>(db: &C, post_id: i32) -> Result<(), AppError> {
    if PostRepository::new(db).find_by_id(post_id).await?.is_none() {
        return Err(post_not_found(post_id));
    }

    Ok(())
}

/// Loads a comment, treating one attached to a different post as missing.
async fn find_on_post<C: ConnectionTrait>(
    repo: &CommentRepository<'_, C>,
    post_id: i32,
    comment_id: i32,
) -> Result<Comment, AppError> {
    repo.find_by_id(comment_id)
        .await?
        .filter(|c| c.post_id == post_id)
        .ok_or_else(|| comment_not_found(comment_id))
}

fn comment_not_found(comment_id: i32) -> AppError {
    AppError::NotFound(format!("Comment {} not found", comment_id))
}
