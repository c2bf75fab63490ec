use super::*;

/// Tests that only direct replies of the parent are returned.
///
/// Expected: the two direct replies, not the nested one
#[tokio::test]
async fn returns_direct_replies_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, post) = factory::helpers::create_post_with_author(db).await?;
    let parent = factory::create_comment(db, post.id, member.id).await?;
    let first = factory::create_reply(db, &parent, member.id).await?;
    let second = factory::create_reply(db, &parent, member.id).await?;
    factory::create_reply(db, &first, member.id).await?;

    let replies = CommentRepository::new(db).find_replies(parent.id).await?;

    assert_eq!(
        replies.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    Ok(())
}

/// Tests that deleting a parent comment removes its replies.
///
/// Expected: no replies remain
#[tokio::test]
async fn replies_cascade_with_parent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, post) = factory::helpers::create_post_with_author(db).await?;
    let parent = factory::create_comment(db, post.id, member.id).await?;
    factory::create_reply(db, &parent, member.id).await?;

    entity::prelude::Comment::delete_by_id(parent.id).exec(db).await?;

    assert!(CommentRepository::new(db)
        .find_replies(parent.id)
        .await?
        .is_empty());

    Ok(())
}
