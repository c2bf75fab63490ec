use super::*;

/// Tests that only the owner can delete a habit.
///
/// Expected: false for another member, true for the owner
#[tokio::test]
async fn deletes_only_owned_habit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_member(db).await?;
    let other = factory::create_member(db).await?;
    let habit = factory::create_habit(db, owner.id).await?;

    let repo = HabitRepository::new(db);

    assert!(!repo.delete(habit.id, other.id).await?);
    assert!(repo.delete(habit.id, owner.id).await?);
    assert!(repo.find_owned(habit.id, owner.id).await?.is_none());

    Ok(())
}
