use super::*;

/// Tests a partial update by the owner.
///
/// Expected: title changed, description kept
#[tokio::test]
async fn updates_title_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let habit = factory::habit::HabitFactory::new(db, member.id)
        .title("Read")
        .description("Before bed")
        .build()
        .await?;

    let updated = HabitRepository::new(db)
        .update(UpdateHabitParams {
            member_id: member.id,
            habit_id: habit.id,
            title: Some("Read fiction".to_string()),
            description: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Read fiction");
    assert_eq!(updated.description.as_deref(), Some("Before bed"));

    Ok(())
}

/// Tests that another member cannot update the habit.
///
/// Expected: Ok(None) and the habit unchanged
#[tokio::test]
async fn ignores_other_members_habit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_member(db).await?;
    let intruder = factory::create_member(db).await?;
    let habit = factory::create_habit(db, owner.id).await?;

    let repo = HabitRepository::new(db);
    let result = repo
        .update(UpdateHabitParams {
            member_id: intruder.id,
            habit_id: habit.id,
            title: Some("Hijacked".to_string()),
            description: None,
        })
        .await?;

    assert!(result.is_none());
    assert_eq!(
        repo.find_owned(habit.id, owner.id).await?.map(|h| h.title),
        Some(habit.title)
    );

    Ok(())
}
