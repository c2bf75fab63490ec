//! Comment factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating comments and replies on a post.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    post_id: i32,
    member_id: i32,
    parent_id: Option<i32>,
    content: String,
}

impl<'a> CommentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, post_id: i32, member_id: i32) -> Self {
        Self {
            db,
            post_id,
            member_id,
            parent_id: None,
            content: format!("Comment {}", next_id()),
        }
    }

    /// Makes the comment a reply to `parent_id`.
    pub fn parent(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now();
        entity::comment::ActiveModel {
            post_id: ActiveValue::Set(self.post_id),
            member_id: ActiveValue::Set(self.member_id),
            parent_id: ActiveValue::Set(self.parent_id),
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_comment(
    db: &DatabaseConnection,
    post_id: i32,
    member_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, post_id, member_id).build().await
}

pub async fn create_reply(
    db: &DatabaseConnection,
    parent: &entity::comment::Model,
    member_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, parent.post_id, member_id)
        .parent(parent.id)
        .build()
        .await
}
