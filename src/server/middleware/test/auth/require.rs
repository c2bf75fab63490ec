use super::*;

/// Tests that a valid token for an existing member resolves to that member.
///
/// Expected: Ok(Member) with the token's member id
#[tokio::test]
async fn resolves_member_from_bearer_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let member = factory::create_member(db).await?;

    let token = tokens.issue(member.id)?;
    let resolved = AuthGuard::new(db, &tokens).require(&bearer(&token)).await?;

    assert_eq!(resolved.id, member.id);
    assert_eq!(resolved.nickname, member.nickname);

    Ok(())
}

/// Tests that a request without an Authorization header is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn fails_without_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let result = AuthGuard::new(db, &tokens).require(&HeaderMap::new()).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests that non-bearer schemes and garbage tokens are rejected.
///
/// Expected: Err(AuthError::InvalidToken) for both
#[tokio::test]
async fn fails_with_malformed_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let guard = AuthGuard::new(db, &tokens);

    let mut basic = HeaderMap::new();
    basic.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    assert!(matches!(
        guard.require(&basic).await,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
    assert!(matches!(
        guard.require(&bearer("not-a-jwt")).await,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests that a token for a deleted member no longer authenticates.
///
/// Expected: Err(AuthError::MemberNotFound)
#[tokio::test]
async fn fails_when_member_is_gone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_schema().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let token = tokens.issue(404)?;
    let result = AuthGuard::new(db, &tokens).require(&bearer(&token)).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MemberNotFound(404)))
    ));

    Ok(())
}
