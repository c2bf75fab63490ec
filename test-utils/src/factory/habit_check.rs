//! Habit check factory.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Marks `habit_id` as done on `check_date`.
pub async fn create_habit_check(
    db: &DatabaseConnection,
    habit_id: i32,
    check_date: NaiveDate,
) -> Result<entity::habit_check::Model, DbErr> {
    entity::habit_check::ActiveModel {
        habit_id: ActiveValue::Set(habit_id),
        check_date: ActiveValue::Set(check_date),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
