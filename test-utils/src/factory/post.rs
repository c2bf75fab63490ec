//! Post factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating posts authored by a given member.
///
/// Defaults: title `"Post {n}"`, content `"Content of post {n}"`, category
/// `"DAILY"`, zero views, created now.
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    title: String,
    content: String,
    thumbnail_url: Option<String>,
    category: String,
    views: i64,
    created_at: DateTime<Utc>,
}

impl<'a> PostFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, member_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            member_id,
            title: format!("Post {}", id),
            content: format!("Content of post {}", id),
            thumbnail_url: None,
            category: "DAILY".to_string(),
            views: 0,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn views(mut self, views: i64) -> Self {
        self.views = views;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            thumbnail_url: ActiveValue::Set(self.thumbnail_url),
            category: ActiveValue::Set(self.category),
            views: ActiveValue::Set(self.views),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_post(
    db: &DatabaseConnection,
    member_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, member_id).build().await
}
