//! Habit check data repository.
//!
//! A check row marks a habit as done on one calendar date. The unique index on
//! `(habit_id, check_date)` rejects a second row for the same day.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect,
};
use std::collections::HashSet;

use crate::server::model::habit::HabitCheck;

/// Repository for habit check rows.
pub struct HabitCheckRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HabitCheckRepository<'a, C> {
    /// Creates a new HabitCheckRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `HabitCheckRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a check of a habit on a date.
    ///
    /// # Arguments
    /// - `habit_id` - Habit being checked
    /// - `check_date` - Calendar date of the check
    ///
    /// # Returns
    /// - `Ok(HabitCheck)` - The stored check
    /// - `Err(DbErr)` - Insert failed, including a unique violation when the habit is already
    ///   checked on that date
    pub async fn create(&self, habit_id: i32, check_date: NaiveDate) -> Result<HabitCheck, DbErr> {
        let entity = entity::habit_check::ActiveModel {
            habit_id: ActiveValue::Set(habit_id),
            check_date: ActiveValue::Set(check_date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(HabitCheck::from_entity(entity))
    }

    /// Returns whether a habit is checked on a date.
    ///
    /// # Arguments
    /// - `habit_id` - Habit ID
    /// - `check_date` - Calendar date to test
    ///
    /// # Returns
    /// - `Ok(true)` - A check row exists
    /// - `Ok(false)` - The habit is not checked on that date
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists(&self, habit_id: i32, check_date: NaiveDate) -> Result<bool, DbErr> {
        let count = entity::prelude::HabitCheck::find()
            .filter(entity::habit_check::Column::HabitId.eq(habit_id))
            .filter(entity::habit_check::Column::CheckDate.eq(check_date))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Removes the check for `(habit_id, check_date)`.
    ///
    /// # Arguments
    /// - `habit_id` - Habit ID
    /// - `check_date` - Calendar date of the check
    ///
    /// # Returns
    /// - `Ok(true)` - A check was removed
    /// - `Ok(false)` - The habit was not checked on that date
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, habit_id: i32, check_date: NaiveDate) -> Result<bool, DbErr> {
        let result = entity::prelude::HabitCheck::delete_many()
            .filter(entity::habit_check::Column::HabitId.eq(habit_id))
            .filter(entity::habit_check::Column::CheckDate.eq(check_date))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Returns which of `habit_ids` are checked on `check_date`, in a single query.
    ///
    /// An empty slice short-circuits without touching the database.
    ///
    /// # Arguments
    /// - `habit_ids` - Habits to test
    /// - `check_date` - Calendar date to test
    ///
    /// # Returns
    /// - `Ok(HashSet<i32>)` - IDs among `habit_ids` with a check on that date
    /// - `Err(DbErr)` - Database error during query
    pub async fn checked_habit_ids(
        &self,
        habit_ids: &[i32],
        check_date: NaiveDate,
    ) -> Result<HashSet<i32>, DbErr> {
        if habit_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let ids: Vec<i32> = entity::prelude::HabitCheck::find()
            .select_only()
            .column(entity::habit_check::Column::HabitId)
            .filter(entity::habit_check::Column::HabitId.is_in(habit_ids.iter().copied()))
            .filter(entity::habit_check::Column::CheckDate.eq(check_date))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }
}
