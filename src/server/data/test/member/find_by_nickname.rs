use super::*;

/// Tests looking up members by nickname and email.
///
/// Expected: Some for stored values, None otherwise
#[tokio::test]
async fn finds_by_nickname_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::member::MemberFactory::new(db)
        .nickname("owl")
        .email("owl@habiters.test")
        .build()
        .await?;

    let repo = MemberRepository::new(db);

    assert_eq!(repo.find_by_nickname("owl").await?.map(|m| m.id), Some(created.id));
    assert_eq!(
        repo.find_by_email("owl@habiters.test").await?.map(|m| m.id),
        Some(created.id)
    );
    assert!(repo.find_by_nickname("lark").await?.is_none());

    Ok(())
}
