use super::*;

/// Tests loading a post together with its author.
///
/// Expected: Some((post, author)) for an existing post, None otherwise
#[tokio::test]
async fn loads_post_and_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, post) = factory::helpers::create_post_with_author(db).await?;

    let repo = PostRepository::new(db);
    let (found, author) = repo.find_with_author(post.id).await?.unwrap();

    assert_eq!(found.id, post.id);
    assert_eq!(author.id, member.id);
    assert_eq!(author.nickname, member.nickname);
    assert!(repo.find_with_author(post.id + 1).await?.is_none());

    Ok(())
}
