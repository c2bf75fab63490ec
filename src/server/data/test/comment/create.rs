use super::*;

/// Tests creating a top-level comment and a reply.
///
/// Expected: reply carries the parent id, top-level comment has none
#[tokio::test]
async fn creates_comment_and_reply() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, post) = factory::helpers::create_post_with_author(db).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(CreateCommentParams {
            member_id: member.id,
            post_id: post.id,
            parent_id: None,
            content: "First!".to_string(),
        })
        .await?;
    let reply = repo
        .create(CreateCommentParams {
            member_id: member.id,
            post_id: post.id,
            parent_id: Some(comment.id),
            content: "Second".to_string(),
        })
        .await?;

    assert!(comment.parent_id.is_none());
    assert_eq!(reply.parent_id, Some(comment.id));
    assert_eq!(reply.post_id, post.id);

    Ok(())
}
