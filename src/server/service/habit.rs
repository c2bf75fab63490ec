use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{habit::HabitRepository, habit_check::HabitCheckRepository},
    error::{habit::HabitError, is_unique_violation, AppError},
    model::habit::{CreateHabitParams, Habit, HabitCheck, HabitStatus, UpdateHabitParams},
};

/// Service for a member's habits and their daily checks.
///
/// Operations taking a `member_id` only see that member's habits; habits of
/// other members are reported as missing.
pub struct HabitService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HabitService<'a> {
    /// Creates a new HabitService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `HabitService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a member's habits with whether each is checked on `date`.
    ///
    /// Check state for all habits is loaded with one query.
    ///
    /// # Arguments
    /// - `member_id` - Owner of the habits
    /// - `date` - Calendar date to report check state for
    ///
    /// # Returns
    /// - `Ok(Vec<HabitStatus>)` - Habits oldest first with their checked flag
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list_for_date(
        &self,
        member_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<HabitStatus>, AppError> {
        let habits = HabitRepository::new(self.db).find_by_member(member_id).await?;

        let ids: Vec<i32> = habits.iter().map(|h| h.id).collect();
        let checked = HabitCheckRepository::new(self.db)
            .checked_habit_ids(&ids, date)
            .await?;

        Ok(habits
            .into_iter()
            .map(|habit| HabitStatus {
                checked: checked.contains(&habit.id),
                habit,
            })
            .collect())
    }

    /// Creates a habit for a member.
    ///
    /// # Arguments
    /// - `params` - Owner ID, trimmed title and optional description
    ///
    /// # Returns
    /// - `Ok(Habit)` - The created habit
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateHabitParams) -> Result<Habit, AppError> {
        let habit = HabitRepository::new(self.db).create(params).await?;

        tracing::info!("Member {} created habit {}", habit.member_id, habit.id);

        Ok(habit)
    }

    /// Updates the title or description of an owned habit.
    ///
    /// # Arguments
    /// - `params` - Owner ID, habit ID and the optional fields to change
    ///
    /// # Returns
    /// - `Ok(Habit)` - The habit after the update
    /// - `Err(AppError::HabitErr(NotFound))` - Habit missing or owned by another member
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, params: UpdateHabitParams) -> Result<Habit, AppError> {
        let habit_id = params.habit_id;
        let txn = self.db.begin().await?;

        let habit = HabitRepository::new(&txn)
            .update(params)
            .await?
            .ok_or(HabitError::NotFound(habit_id))?;

        txn.commit().await?;

        Ok(habit)
    }

    /// Deletes an owned habit together with its checks.
    ///
    /// # Arguments
    /// - `member_id` - Acting member
    /// - `habit_id` - Habit ID
    ///
    /// # Returns
    /// - `Ok(())` - Habit deleted
    /// - `Err(AppError::HabitErr(NotFound))` - Habit missing or owned by another member
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, member_id: i32, habit_id: i32) -> Result<(), AppError> {
        if !HabitRepository::new(self.db).delete(habit_id, member_id).await? {
            return Err(HabitError::NotFound(habit_id).into());
        }

        tracing::info!("Member {} deleted habit {}", member_id, habit_id);

        Ok(())
    }

    /// Returns whether a habit is checked on `date`.
    ///
    /// Ownership is not checked; callers pass a habit they already resolved for the member.
    ///
    /// # Arguments
    /// - `habit_id` - Habit ID
    /// - `date` - Calendar date to test
    ///
    /// # Returns
    /// - `Ok(bool)` - Check state on that date
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn is_checked(&self, habit_id: i32, date: NaiveDate) -> Result<bool, AppError> {
        Ok(HabitCheckRepository::new(self.db).exists(habit_id, date).await?)
    }

    /// Marks an owned habit as done on `date`.
    ///
    /// A second check on the same date fails with `HabitError::AlreadyChecked`,
    /// including when a concurrent check wins the race on the unique index.
    ///
    /// # Arguments
    /// - `member_id` - Acting member
    /// - `habit_id` - Habit ID
    /// - `date` - Calendar date being checked
    ///
    /// # Returns
    /// - `Ok(HabitCheck)` - The stored check
    /// - `Err(AppError::HabitErr(NotFound))` - Habit missing or owned by another member
    /// - `Err(AppError::HabitErr(AlreadyChecked))` - Habit already checked on that date
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn check(
        &self,
        member_id: i32,
        habit_id: i32,
        date: NaiveDate,
    ) -> Result<HabitCheck, AppError> {
        let txn = self.db.begin().await?;

        if HabitRepository::new(&txn)
            .find_owned(habit_id, member_id)
            .await?
            .is_none()
        {
            return Err(HabitError::NotFound(habit_id).into());
        }

        let checks = HabitCheckRepository::new(&txn);
        if checks.exists(habit_id, date).await? {
            return Err(HabitError::AlreadyChecked { habit_id, date }.into());
        }

        let check = match checks.create(habit_id, date).await {
            Ok(check) => check,
            Err(err) if is_unique_violation(&err) => {
                return Err(HabitError::AlreadyChecked { habit_id, date }.into())
            }
            Err(err) => return Err(err.into()),
        };

        txn.commit().await?;

        tracing::info!("Habit {} checked on {}", habit_id, date);

        Ok(check)
    }

    /// Removes the mark for `date` from an owned habit.
    ///
    /// # Arguments
    /// - `member_id` - Acting member
    /// - `habit_id` - Habit ID
    /// - `date` - Calendar date being unchecked
    ///
    /// # Returns
    /// - `Ok(())` - Check removed
    /// - `Err(AppError::HabitErr(NotFound))` - Habit missing or owned by another member
    /// - `Err(AppError::HabitErr(NotChecked))` - Habit was not checked on that date
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn uncheck(
        &self,
        member_id: i32,
        habit_id: i32,
        date: NaiveDate,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if HabitRepository::new(&txn)
            .find_owned(habit_id, member_id)
            .await?
            .is_none()
        {
            return Err(HabitError::NotFound(habit_id).into());
        }

        if !HabitCheckRepository::new(&txn).delete(habit_id, date).await? {
            return Err(HabitError::NotChecked { habit_id, date }.into());
        }

        txn.commit().await?;

        tracing::info!("Habit {} unchecked on {}", habit_id, date);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::habit::{CreateHabitDto, UpdateHabitDto};
    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
    use test_utils::{builder::TestBuilder, factory};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
    }

    async fn check_rows(db: &DatabaseConnection, habit_id: i32, date: NaiveDate) -> u64 {
        entity::prelude::HabitCheck::find()
            .filter(entity::habit_check::Column::HabitId.eq(habit_id))
            .filter(entity::habit_check::Column::CheckDate.eq(date))
            .count(db)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn lists_habits_with_checked_flag_for_date() -> Result<(), AppError> {
        let test = TestBuilder::new().with_schema().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let member = factory::create_member(db).await?;
        let done = factory::create_habit(db, member.id).await?;
        let pending = factory::create_habit(db, member.id).await?;
        factory::create_habit_check(db, done.id, day(1)).await?;
        factory::create_habit_check(db, pending.id, day(2)).await?;

        let statuses = HabitService::new(db).list_for_date(member.id, day(1)).await?;

        assert_eq!(statuses.len(), 2);
        assert!(statuses.iter().any(|s| s.habit.id == done.id && s.checked));
        assert!(statuses.iter().any(|s| s.habit.id == pending.id && !s.checked));

        Ok(())
    }

    #[tokio::test]
    async fn creates_and_updates_habit() -> Result<(), AppError> {
        let test = TestBuilder::new().with_schema().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let member = factory::create_member(db).await?;
        let service = HabitService::new(db);

        let habit = service
            .create(CreateHabitParams::from_dto(
                member.id,
                CreateHabitDto {
                    title: " Stretch ".to_string(),
                    description: Some("Ten minutes".to_string()),
                },
            )?)
            .await?;
        let updated = service
            .update(UpdateHabitParams::from_dto(
                member.id,
                habit.id,
                UpdateHabitDto {
                    title: Some("Yoga".to_string()),
                    description: None,
                },
            )?)
            .await?;

        assert_eq!(habit.title, "Stretch");
        assert_eq!(updated.title, "Yoga");
        assert_eq!(updated.description.as_deref(), Some("Ten minutes"));

        Ok(())
    }

    #[tokio::test]
    async fn hides_other_members_habits() -> Result<(), AppError> {
        let test = TestBuilder::new().with_schema().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let owner = factory::create_member(db).await?;
        let intruder = factory::create_member(db).await?;
        let habit = factory::create_habit(db, owner.id).await?;
        let service = HabitService::new(db);

        assert!(matches!(
            service.check(intruder.id, habit.id, day(1)).await,
            Err(AppError::HabitErr(HabitError::NotFound(_)))
        ));
        assert!(matches!(
            service.delete(intruder.id, habit.id).await,
            Err(AppError::HabitErr(HabitError::NotFound(_)))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn rejects_second_check_on_same_date() -> Result<(), AppError> {
        let test = TestBuilder::new().with_schema().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let member = factory::create_member(db).await?;
        let habit = factory::create_habit(db, member.id).await?;
        let service = HabitService::new(db);

        service.check(member.id, habit.id, day(3)).await?;
        let second = service.check(member.id, habit.id, day(3)).await;

        assert!(matches!(
            second,
            Err(AppError::HabitErr(HabitError::AlreadyChecked { .. }))
        ));
        assert_eq!(check_rows(db, habit.id, day(3)).await, 1);

        Ok(())
    }

    #[tokio::test]
    async fn unchecks_and_reports_missing_check() -> Result<(), AppError> {
        let test = TestBuilder::new().with_schema().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let member = factory::create_member(db).await?;
        let habit = factory::create_habit(db, member.id).await?;
        let service = HabitService::new(db);

        service.check(member.id, habit.id, day(4)).await?;
        service.uncheck(member.id, habit.id, day(4)).await?;
        let again = service.uncheck(member.id, habit.id, day(4)).await;

        assert!(matches!(
            again,
            Err(AppError::HabitErr(HabitError::NotChecked { .. }))
        ));
        assert_eq!(check_rows(db, habit.id, day(4)).await, 0);

        Ok(())
    }

    #[tokio::test]
    async fn interleaved_check_and_uncheck_leave_at_most_one_row() -> Result<(), AppError> {
        let test = TestBuilder::new().with_schema().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let member = factory::create_member(db).await?;
        let habit = factory::create_habit(db, member.id).await?;
        let service = HabitService::new(db);

        let _ = tokio::join!(
            service.check(member.id, habit.id, day(5)),
            service.check(member.id, habit.id, day(5)),
            service.uncheck(member.id, habit.id, day(5)),
            service.check(member.id, habit.id, day(5)),
        );

        assert!(check_rows(db, habit.id, day(5)).await <= 1);

        Ok(())
    }

    #[tokio::test]
    async fn deleting_habit_removes_its_checks() -> Result<(), AppError> {
        let test = TestBuilder::new().with_schema().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let member = factory::create_member(db).await?;
        let habit = factory::create_habit(db, member.id).await?;
        factory::create_habit_check(db, habit.id, day(6)).await?;

        HabitService::new(db).delete(member.id, habit.id).await?;

        assert_eq!(check_rows(db, habit.id, day(6)).await, 0);

        Ok(())
    }
}
