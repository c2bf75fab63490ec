use super::*;

/// Tests listing only the member's own habits in creation order.
///
/// Expected: the member's two habits, oldest first
#[tokio::test]
async fn lists_member_habits_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let other = factory::create_member(db).await?;
    let first = factory::habit::HabitFactory::new(db, member.id)
        .title("Journal")
        .build()
        .await?;
    let second = factory::habit::HabitFactory::new(db, member.id)
        .title("Walk")
        .build()
        .await?;
    factory::create_habit(db, other.id).await?;

    let habits = HabitRepository::new(db).find_by_member(member.id).await?;

    assert_eq!(
        habits.iter().map(|h| h.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}
