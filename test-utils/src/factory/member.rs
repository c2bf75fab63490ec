//! Member factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members.
///
/// Defaults: nickname `"member_{n}"`, email `"member_{n}@habiters.test"`, no
/// profile image, no introduction.
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    nickname: String,
    email: String,
    profile_image_url: Option<String>,
    introduction: Option<String>,
}

impl<'a> MemberFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            nickname: format!("member_{}", id),
            email: format!("member_{}@habiters.test", id),
            profile_image_url: None,
            introduction: None,
        }
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn profile_image_url(mut self, url: impl Into<String>) -> Self {
        self.profile_image_url = Some(url.into());
        self
    }

    pub fn introduction(mut self, introduction: impl Into<String>) -> Self {
        self.introduction = Some(introduction.into());
        self
    }

    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            nickname: ActiveValue::Set(self.nickname),
            email: ActiveValue::Set(self.email),
            profile_image_url: ActiveValue::Set(self.profile_image_url),
            introduction: ActiveValue::Set(self.introduction),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}
