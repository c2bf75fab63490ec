use super::*;

/// Tests replacing comment content.
///
/// Expected: new content returned, missing comment gives None
#[tokio::test]
async fn replaces_content() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, post) = factory::helpers::create_post_with_author(db).await?;
    let comment = factory::create_comment(db, post.id, member.id).await?;

    let repo = CommentRepository::new(db);
    let updated = repo
        .update_content(comment.id, "Fixed typo".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.content, "Fixed typo");
    assert!(repo
        .update_content(comment.id + 100, "x".to_string())
        .await?
        .is_none());

    Ok(())
}
