use super::*;

/// Tests that a reaction is only found through the post it belongs to.
///
/// Expected: Some on its own post, None on another post
#[tokio::test]
async fn scopes_lookup_to_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, post) = factory::helpers::create_post_with_author(db).await?;
    let other_post = factory::create_post(db, member.id).await?;
    let emoji = factory::create_emoji(db, post.id, member.id, "CLAP").await?;

    let repo = EmojiRepository::new(db);

    assert_eq!(
        repo.find_on_post(post.id, emoji.id).await?.map(|e| e.kind),
        Some("CLAP".to_string())
    );
    assert!(repo.find_on_post(other_post.id, emoji.id).await?.is_none());
    assert_eq!(repo.find_by_post(post.id).await?.len(), 1);

    Ok(())
}
