use super::*;

/// Tests creating a habit for a member.
///
/// Expected: Ok(Habit) owned by the member and findable as owned
#[tokio::test]
async fn creates_owned_habit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let other = factory::create_member(db).await?;

    let repo = HabitRepository::new(db);
    let habit = repo
        .create(CreateHabitParams {
            member_id: member.id,
            title: "Stretch".to_string(),
            description: Some("Ten minutes".to_string()),
        })
        .await?;

    assert_eq!(habit.member_id, member.id);
    assert_eq!(habit.title, "Stretch");
    assert!(repo.find_owned(habit.id, member.id).await?.is_some());
    assert!(repo.find_owned(habit.id, other.id).await?.is_none());

    Ok(())
}
