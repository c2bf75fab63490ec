use super::*;

/// Tests resolving the checked subset of several habits for one date.
///
/// Expected: only habits with a check on that date
#[tokio::test]
async fn returns_checked_subset() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let read = factory::create_habit(db, member.id).await?;
    let walk = factory::create_habit(db, member.id).await?;
    let swim = factory::create_habit(db, member.id).await?;
    factory::create_habit_check(db, read.id, day(10)).await?;
    factory::create_habit_check(db, swim.id, day(11)).await?;

    let checked = HabitCheckRepository::new(db)
        .checked_habit_ids(&[read.id, walk.id, swim.id], day(10))
        .await?;

    assert!(checked.contains(&read.id));
    assert!(!checked.contains(&walk.id));
    assert!(!checked.contains(&swim.id));

    Ok(())
}

/// Tests that an empty id list skips the query.
///
/// Expected: empty set
#[tokio::test]
async fn empty_ids_return_empty_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let checked = HabitCheckRepository::new(db)
        .checked_habit_ids(&[], day(10))
        .await?;

    assert!(checked.is_empty());

    Ok(())
}
