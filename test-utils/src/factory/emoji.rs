//! Emoji reaction factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds a reaction of `kind` by `member_id` to `post_id`.
pub async fn create_emoji(
    db: &DatabaseConnection,
    post_id: i32,
    member_id: i32,
    kind: &str,
) -> Result<entity::emoji::Model, DbErr> {
    entity::emoji::ActiveModel {
        post_id: ActiveValue::Set(post_id),
        member_id: ActiveValue::Set(member_id),
        kind: ActiveValue::Set(kind.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
