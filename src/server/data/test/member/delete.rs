use super::*;

/// Tests that deleting a member removes their habits and posts.
///
/// Expected: Ok(true), then no rows left for the member
#[tokio::test]
async fn deletes_member_with_owned_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _post) = factory::helpers::create_post_with_author(db).await?;
    factory::create_habit(db, member.id).await?;

    let repo = MemberRepository::new(db);

    assert!(repo.delete(member.id).await?);
    assert!(!repo.delete(member.id).await?);
    assert_eq!(entity::prelude::Habit::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Post::find().count(db).await?, 0);

    Ok(())
}
