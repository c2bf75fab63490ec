use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request has no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token failed signature, expiry or claim validation.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Token is valid but its subject no longer exists.
    #[error("Member {0} from bearer token does not exist")]
    MemberNotFound(i32),

    /// Issue time plus the configured lifetime does not fit a timestamp.
    #[error("Token lifetime overflows the expiry timestamp")]
    ExpiryOutOfRange,

    /// Signing a new token failed.
    #[error("Failed to issue access token: {0}")]
    TokenCreation(#[from] jsonwebtoken::errors::Error),
}

/// Maps every rejected credential to 401 with the same message so clients cannot
/// tell an expired token from a deleted member. Details are logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::TokenCreation(err) => InternalServerError(err).into_response(),
            err @ Self::ExpiryOutOfRange => InternalServerError(err).into_response(),
            err => {
                tracing::debug!("{}", err);
                error_response(
                    StatusCode::UNAUTHORIZED,
                    "Authentication required".to_string(),
                )
            }
        }
    }
}
