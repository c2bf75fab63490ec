use super::*;

/// Tests removing a reaction.
///
/// Expected: true once, then false
#[tokio::test]
async fn deletes_reaction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, post) = factory::helpers::create_post_with_author(db).await?;
    let emoji = factory::create_emoji(db, post.id, member.id, "LIKE").await?;

    let repo = EmojiRepository::new(db);

    assert!(repo.delete(emoji.id).await?);
    assert!(!repo.delete(emoji.id).await?);

    Ok(())
}
