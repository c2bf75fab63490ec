use super::*;

/// Tests a partial post update.
///
/// Expected: title and category changed, content kept
#[tokio::test]
async fn updates_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let post = factory::post::PostFactory::new(db, member.id)
        .title("Draft")
        .content("Body stays")
        .build()
        .await?;

    let updated = PostRepository::new(db)
        .update(UpdatePostParams {
            member_id: member.id,
            post_id: post.id,
            title: Some("Final".to_string()),
            content: None,
            thumbnail_url: None,
            category: Some(Category::Study),
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Final");
    assert_eq!(updated.content, "Body stays");
    assert_eq!(updated.category, Category::Study);

    Ok(())
}

/// Tests that deleting a post removes its comments and reactions.
///
/// Expected: Ok(true) and no comment or emoji rows left
#[tokio::test]
async fn delete_cascades_to_children() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, post) = factory::helpers::create_post_with_author(db).await?;
    factory::create_comment(db, post.id, member.id).await?;
    factory::create_emoji(db, post.id, member.id, "LIKE").await?;

    assert!(PostRepository::new(db).delete(post.id).await?);
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Emoji::find().count(db).await?, 0);

    Ok(())
}
