//! Habit factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating habits owned by a given member.
pub struct HabitFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    title: String,
    description: Option<String>,
}

impl<'a> HabitFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, member_id: i32) -> Self {
        Self {
            db,
            member_id,
            title: format!("Habit {}", next_id()),
            description: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub async fn build(self) -> Result<entity::habit::Model, DbErr> {
        let now = Utc::now();
        entity::habit::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_habit(
    db: &DatabaseConnection,
    member_id: i32,
) -> Result<entity::habit::Model, DbErr> {
    HabitFactory::new(db, member_id).build().await
}
