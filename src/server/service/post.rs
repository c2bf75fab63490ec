use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{comment::CommentRepository, emoji::EmojiRepository, post::PostRepository},
    error::AppError,
    model::post::{
        CreatePostParams, PaginatedPosts, Post, PostDetail, PostSearchParams, PostSummary,
        UpdatePostParams,
    },
};

/// Service for posts: listing, search, reads and author-only edits.
pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    /// Creates a new PostService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PostService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists posts matching `params`, newest first, with page metadata.
    ///
    /// Serves both the plain listing and keyword search; a keyword that is missing or
    /// too short leaves the results unfiltered by text.
    ///
    /// # Arguments
    /// - `params` - Category, keyword and search type filters plus page and page size
    ///
    /// # Returns
    /// - `Ok(PaginatedPosts)` - The page with counts, total matches and total pages
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn search(&self, params: PostSearchParams) -> Result<PaginatedPosts, AppError> {
        let (posts, total) = PostRepository::new(self.db).search(&params).await?;

        let total_pages = if params.per_page > 0 {
            (total as f64 / params.per_page as f64).ceil() as u64
        } else {
            0
        };

        tracing::debug!(
            "Post search {:?}/{:?} matched {} posts",
            params.category,
            params.search_type,
            total
        );

        Ok(PaginatedPosts {
            posts,
            total,
            page: params.page,
            per_page: params.per_page,
            total_pages,
        })
    }

    /// Creates a post.
    ///
    /// # Arguments
    /// - `params` - Author ID, title, content, optional thumbnail and category
    ///
    /// # Returns
    /// - `Ok(Post)` - The created post with zero views
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreatePostParams) -> Result<Post, AppError> {
        let post = PostRepository::new(self.db).create(params).await?;

        tracing::info!("Member {} created post {}", post.member_id, post.id);

        Ok(post)
    }

    /// Attaches comment and emoji counts to a post.
    ///
    /// # Arguments
    /// - `post` - Post to summarize
    ///
    /// # Returns
    /// - `Ok(PostSummary)` - Post with its current counts
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn summarize(&self, post: Post) -> Result<PostSummary, AppError> {
        let (comment_count, emoji_count) = PostRepository::new(self.db).counts(post.id).await?;

        Ok(PostSummary {
            post,
            comment_count,
            emoji_count,
        })
    }

    /// Reads a post, counting the read as one view.
    ///
    /// The counter is incremented in the database before the post is loaded, so the
    /// returned view count includes this read. The post with its author (one join),
    /// its reactions and its comment tree are then fetched concurrently, so the
    /// read costs two sequential round trips regardless of how many relations
    /// are loaded.
    ///
    /// # Arguments
    /// - `post_id` - ID of the post to read
    ///
    /// # Returns
    /// - `Ok(PostDetail)` - Post with author, reactions and comments
    /// - `Err(AppError::NotFound)` - No post with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn read(&self, post_id: i32) -> Result<PostDetail, AppError> {
        let repo = PostRepository::new(self.db);

        if !repo.increment_views(post_id).await? {
            return Err(post_not_found(post_id));
        }

        let emoji_repo = EmojiRepository::new(self.db);
        let comment_repo = CommentRepository::new(self.db);
        let (found, emojis, comments) = tokio::try_join!(
            repo.find_with_author(post_id),
            emoji_repo.find_by_post(post_id),
            comment_repo.find_by_post(post_id),
        )?;
        let (post, author) = found.ok_or_else(|| post_not_found(post_id))?;

        Ok(PostDetail {
            post,
            author,
            emojis,
            comments,
        })
    }

    /// Updates a post. Only its author may do so.
    ///
    /// # Arguments
    /// - `params` - Acting member, post ID and the optional fields to change
    ///
    /// # Returns
    /// - `Ok(Post)` - The post after the update
    /// - `Err(AppError::NotFound)` - No post with that ID
    /// - `Err(AppError::Forbidden)` - Post written by another member
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, params: UpdatePostParams) -> Result<Post, AppError> {
        let post_id = params.post_id;
        let txn = self.db.begin().await?;
        let repo = PostRepository::new(&txn);

        let post = repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| post_not_found(post_id))?;
        ensure_author(&post, params.member_id)?;

        let updated = repo
            .update(params)
            .await?
            .ok_or_else(|| post_not_found(post_id))?;

        txn.commit().await?;

        tracing::info!("Member {} updated post {}", updated.member_id, post_id);

        Ok(updated)
    }

    /// Deletes a post with its comments and reactions. Only its author may do so.
    ///
    /// # Arguments
    /// - `member_id` - Acting member
    /// - `post_id` - Post ID
    ///
    /// # Returns
    /// - `Ok(())` - Post deleted
    /// - `Err(AppError::NotFound)` - No post with that ID
    /// - `Err(AppError::Forbidden)` - Post written by another member
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, member_id: i32, post_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = PostRepository::new(&txn);

        let post = repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| post_not_found(post_id))?;
        ensure_author(&post, member_id)?;

        repo.delete(post_id).await?;
        txn.commit().await?;

        tracing::info!("Member {} deleted post {}", member_id, post_id);

        Ok(())
    }
}

/// Error returned when `post_id` does not name a post.
pub(crate) fn post_not_found(post_id: i32) -> AppError {
    AppError::NotFound(format!("Post {} not found", post_id))
}

fn ensure_author(post: &Post, member_id: i32) -> Result<(), AppError> {
    if post.member_id != member_id {
        return Err(AppError::Forbidden(format!(
            "Post {} belongs to another member",
            post.id
        )));
    }

    Ok(())
}
