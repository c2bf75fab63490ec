use super::*;

/// Tests that each increment adds exactly one view.
///
/// Expected: views 2 after two increments
#[tokio::test]
async fn increments_by_one() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_member, post) = factory::helpers::create_post_with_author(db).await?;

    let repo = PostRepository::new(db);
    assert!(repo.increment_views(post.id).await?);
    assert!(repo.increment_views(post.id).await?);

    let stored = repo.find_by_id(post.id).await?.unwrap();

    assert_eq!(stored.views, post.views + 2);

    Ok(())
}

/// Tests incrementing a post that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!PostRepository::new(db).increment_views(31).await?);

    Ok(())
}
