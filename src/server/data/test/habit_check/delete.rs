use super::*;

/// Tests removing a check.
///
/// Expected: true for the existing check, false once it is gone
#[tokio::test]
async fn deletes_existing_check() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let habit = factory::create_habit(db, member.id).await?;
    factory::create_habit_check(db, habit.id, day(3)).await?;

    let repo = HabitCheckRepository::new(db);

    assert!(repo.delete(habit.id, day(3)).await?);
    assert!(!repo.delete(habit.id, day(3)).await?);

    Ok(())
}
