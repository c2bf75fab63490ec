use super::*;

/// Tests listing every comment of one post, replies included.
///
/// Expected: both rows of the post in creation order, none from the other post
#[tokio::test]
async fn lists_post_comments_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, post) = factory::helpers::create_post_with_author(db).await?;
    let other_post = factory::create_post(db, member.id).await?;
    let comment = factory::create_comment(db, post.id, member.id).await?;
    let reply = factory::create_reply(db, &comment, member.id).await?;
    factory::create_comment(db, other_post.id, member.id).await?;

    let comments = CommentRepository::new(db).find_by_post(post.id).await?;

    assert_eq!(
        comments.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![comment.id, reply.id]
    );

    Ok(())
}
