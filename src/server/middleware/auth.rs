use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::member::MemberRepository,
    error::{auth::AuthError, AppError},
    model::member::Member,
    service::auth::TokenService,
    state::AppState,
};

/// Resolves the bearer token of a request to an existing member.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    /// Creates a new AuthGuard instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token service used to verify bearer tokens
    ///
    /// # Returns
    /// - `AuthGuard` - New guard instance
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Requires a valid bearer token naming an existing member.
    ///
    /// Reads `Authorization: Bearer <token>`, verifies the token's signature and
    /// expiry, then loads the member it names. A token for a deleted member is
    /// rejected like any other invalid credential.
    ///
    /// # Arguments
    /// - `headers` - Request headers carrying the `Authorization` header
    ///
    /// # Returns
    /// - `Ok(Member)` - The authenticated member
    /// - `Err(AppError::AuthErr(MissingToken))` - No `Authorization` header
    /// - `Err(AppError::AuthErr(InvalidToken))` - Malformed header, bad signature or expired token
    /// - `Err(AppError::AuthErr(MemberNotFound))` - Token names a member that no longer exists
    /// - `Err(AppError::DbErr)` - Database error during member lookup
    pub async fn require(&self, headers: &HeaderMap) -> Result<Member, AppError> {
        let token = bearer_token(headers)?;
        let member_id = self.tokens.verify(token)?;

        let Some(member) = MemberRepository::new(self.db).find_by_id(member_id).await? else {
            return Err(AuthError::MemberNotFound(member_id).into());
        };

        Ok(member)
    }
}

/// Authenticated member id, extracted from `Authorization: Bearer <token>`.
///
/// Rejects with 401 when the header is missing or malformed, the token fails
/// verification, or the member no longer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthMember(pub i32);

impl FromRequestParts<AppState> for AuthMember {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let member = AuthGuard::new(&state.db, &state.tokens)
            .require(&parts.headers)
            .await?;

        Ok(Self(member.id))
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidToken("authorization header is not ASCII".to_string()))?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => Err(AuthError::InvalidToken(
            "expected a bearer token".to_string(),
        )),
    }
}
