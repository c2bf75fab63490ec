use super::*;

/// Tests creating a post with zero views.
///
/// Expected: Ok(Post) with the stored category and views 0
#[tokio::test]
async fn creates_post_with_zero_views() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let post = PostRepository::new(db)
        .create(CreatePostParams {
            member_id: member.id,
            title: "Day 1".to_string(),
            content: "Started journaling".to_string(),
            thumbnail_url: None,
            category: Category::Hobby,
        })
        .await?;

    assert_eq!(post.category, Category::Hobby);
    assert_eq!(post.views, 0);
    assert_eq!(post.member_id, member.id);

    Ok(())
}

/// Tests that a stored category outside the known set fails conversion.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn rejects_unknown_stored_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let post = factory::post::PostFactory::new(db, member.id)
        .category("GARDEN")
        .build()
        .await?;

    let result = PostRepository::new(db).find_by_id(post.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
