//! Habit data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::habit::{CreateHabitParams, Habit, UpdateHabitParams};

/// Repository for habit rows.
///
/// Reads and writes that take a `member_id` only touch habits owned by that member.
pub struct HabitRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HabitRepository<'a, C> {
    /// Creates a new HabitRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `HabitRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a habit for a member.
    ///
    /// `created_at` and `updated_at` are both set to the current time.
    ///
    /// # Arguments
    /// - `params` - Owner ID, trimmed title and optional description
    ///
    /// # Returns
    /// - `Ok(Habit)` - The created habit
    /// - `Err(DbErr)` - Insert failed, e.g. the member no longer exists
    pub async fn create(&self, params: CreateHabitParams) -> Result<Habit, DbErr> {
        let now = Utc::now();
        let entity = entity::habit::ActiveModel {
            member_id: ActiveValue::Set(params.member_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Habit::from_entity(entity))
    }

    /// Finds a habit only if it belongs to `member_id`.
    ///
    /// # Arguments
    /// - `habit_id` - Habit ID
    /// - `member_id` - Member expected to own the habit
    ///
    /// # Returns
    /// - `Ok(Some(Habit))` - Habit found and owned by the member
    /// - `Ok(None)` - Habit missing or owned by another member
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_owned(&self, habit_id: i32, member_id: i32) -> Result<Option<Habit>, DbErr> {
        let entity = entity::prelude::Habit::find_by_id(habit_id)
            .filter(entity::habit::Column::MemberId.eq(member_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Habit::from_entity))
    }

    /// Lists all habits of a member, oldest first.
    ///
    /// Ties on `created_at` are broken by ID so the order is stable.
    ///
    /// # Arguments
    /// - `member_id` - Owner of the habits
    ///
    /// # Returns
    /// - `Ok(Vec<Habit>)` - The member's habits, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_member(&self, member_id: i32) -> Result<Vec<Habit>, DbErr> {
        let entities = entity::prelude::Habit::find()
            .filter(entity::habit::Column::MemberId.eq(member_id))
            .order_by_asc(entity::habit::Column::CreatedAt)
            .order_by_asc(entity::habit::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Habit::from_entity).collect())
    }

    /// Applies the fields present in `params` to a habit owned by `params.member_id`.
    ///
    /// Absent fields keep their stored value; `updated_at` is always refreshed.
    ///
    /// # Arguments
    /// - `params` - Owner ID, habit ID and the optional title and description
    ///
    /// # Returns
    /// - `Ok(Some(Habit))` - The habit after the update
    /// - `Ok(None)` - Habit missing or owned by another member
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, params: UpdateHabitParams) -> Result<Option<Habit>, DbErr> {
        let Some(entity) = entity::prelude::Habit::find_by_id(params.habit_id)
            .filter(entity::habit::Column::MemberId.eq(params.member_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Habit::from_entity(updated)))
    }

    /// Deletes a habit owned by `member_id`; its checks cascade.
    ///
    /// # Arguments
    /// - `habit_id` - Habit ID
    /// - `member_id` - Member expected to own the habit
    ///
    /// # Returns
    /// - `Ok(true)` - Habit deleted
    /// - `Ok(false)` - Habit missing or owned by another member
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, habit_id: i32, member_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Habit::delete_many()
            .filter(entity::habit::Column::Id.eq(habit_id))
            .filter(entity::habit::Column::MemberId.eq(member_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
