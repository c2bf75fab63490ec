use super::*;

/// Tests adding reactions and detecting duplicates.
///
/// Expected: exists for the stored kind, unique violation for a repeat
#[tokio::test]
async fn creates_reaction_once_per_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, post) = factory::helpers::create_post_with_author(db).await?;
    let params = AddEmojiParams {
        member_id: member.id,
        post_id: post.id,
        kind: "FIRE".to_string(),
    };

    let repo = EmojiRepository::new(db);
    let emoji = repo.create(params.clone()).await?;
    let repeat = repo.create(params).await;

    assert_eq!(emoji.kind, "FIRE");
    assert!(repo.exists(post.id, member.id, "FIRE").await?);
    assert!(!repo.exists(post.id, member.id, "LIKE").await?);
    assert!(crate::server::error::is_unique_violation(&repeat.unwrap_err()));

    Ok(())
}
