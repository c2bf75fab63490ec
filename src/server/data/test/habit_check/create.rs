use super::*;

/// Tests checking a habit and detecting the check.
///
/// Expected: exists is true only for the checked date
#[tokio::test]
async fn creates_check_for_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let habit = factory::create_habit(db, member.id).await?;

    let repo = HabitCheckRepository::new(db);
    let check = repo.create(habit.id, day(16)).await?;

    assert_eq!(check.habit_id, habit.id);
    assert_eq!(check.check_date, day(16));
    assert!(repo.exists(habit.id, day(16)).await?);
    assert!(!repo.exists(habit.id, day(17)).await?);

    Ok(())
}

/// Tests that the unique index rejects a second check on the same date.
///
/// Expected: Err(DbErr) recognised as a unique violation
#[tokio::test]
async fn rejects_second_check_same_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let habit = factory::create_habit(db, member.id).await?;

    let repo = HabitCheckRepository::new(db);
    repo.create(habit.id, day(16)).await?;
    let result = repo.create(habit.id, day(16)).await;

    assert!(crate::server::error::is_unique_violation(&result.unwrap_err()));

    Ok(())
}
