use super::*;

/// Tests that only the supplied fields change.
///
/// Expected: introduction updated, nickname and image unchanged
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::member::MemberFactory::new(db)
        .nickname("heron")
        .profile_image_url("https://img.test/heron.png")
        .build()
        .await?;

    let updated = MemberRepository::new(db)
        .update(UpdateMemberParams {
            member_id: created.id,
            nickname: None,
            profile_image_url: None,
            introduction: Some("Early riser".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(updated.nickname, "heron");
    assert_eq!(
        updated.profile_image_url.as_deref(),
        Some("https://img.test/heron.png")
    );
    assert_eq!(updated.introduction.as_deref(), Some("Early riser"));

    Ok(())
}

/// Tests that an update without any field returns the stored member unchanged.
///
/// Expected: Ok(Some(Member)) equal to the stored row
#[tokio::test]
async fn empty_update_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_member(db).await?;
    let repo = MemberRepository::new(db);
    let before = repo.find_by_id(created.id).await?;

    let after = repo
        .update(UpdateMemberParams {
            member_id: created.id,
            nickname: None,
            profile_image_url: None,
            introduction: None,
        })
        .await?;

    assert_eq!(after, before);

    Ok(())
}

/// Tests updating a member that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MemberRepository::new(db)
        .update(UpdateMemberParams {
            member_id: 77,
            nickname: Some("ghost".to_string()),
            profile_image_url: None,
            introduction: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
