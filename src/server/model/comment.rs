//! Comment and reply domain models.

use chrono::{DateTime, Utc};

use crate::{model::comment::CommentDto, server::error::AppError};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub member_id: i32,
    pub parent_id: Option<i32>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
            member_id: entity.member_id,
            parent_id: entity.parent_id,
            content: entity.content,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            post_id: self.post_id,
            member_id: self.member_id,
            parent_id: self.parent_id,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// New comment on a post, or a reply when `parent_id` is set.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub member_id: i32,
    pub post_id: i32,
    pub parent_id: Option<i32>,
    pub content: String,
}

impl CreateCommentParams {
    pub fn new(member_id: i32, post_id: i32, content: String) -> Result<Self, AppError> {
        Ok(Self {
            member_id,
            post_id,
            parent_id: None,
            content: require_content(content)?,
        })
    }

    pub fn reply(
        member_id: i32,
        post_id: i32,
        parent_id: i32,
        content: String,
    ) -> Result<Self, AppError> {
        Ok(Self {
            parent_id: Some(parent_id),
            ..Self::new(member_id, post_id, content)?
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCommentParams {
    pub member_id: i32,
    pub post_id: i32,
    pub comment_id: i32,
    pub content: String,
}

impl UpdateCommentParams {
    pub fn new(
        member_id: i32,
        post_id: i32,
        comment_id: i32,
        content: String,
    ) -> Result<Self, AppError> {
        Ok(Self {
            member_id,
            post_id,
            comment_id,
            content: require_content(content)?,
        })
    }
}

fn require_content(content: String) -> Result<String, AppError> {
    if content.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Comment content must not be blank".to_string(),
        ));
    }

    Ok(content)
}
