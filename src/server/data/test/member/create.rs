use super::*;

/// Tests creating a member.
///
/// Expected: Ok(Member) with the given nickname and email
#[tokio::test]
async fn creates_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo.create(register_params("dawn")).await?;

    assert_eq!(member.nickname, "dawn");
    assert_eq!(member.email, "dawn@habiters.test");
    assert!(member.profile_image_url.is_none());

    Ok(())
}

/// Tests that the unique index rejects a second member with the same nickname.
///
/// Expected: Err(DbErr) recognised as a unique violation
#[tokio::test]
async fn rejects_duplicate_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    repo.create(register_params("dawn")).await?;

    let mut params = register_params("dawn");
    params.email = "other@habiters.test".to_string();
    let result = repo.create(params).await;

    assert!(result.is_err());
    assert!(crate::server::error::is_unique_violation(&result.unwrap_err()));

    Ok(())
}
