use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum MemberError {
    #[error("Member {0} not found")]
    NotFound(i32),

    /// Another member already uses the nickname.
    #[error("Nickname '{0}' is already in use")]
    DuplicateNickname(String),

    #[error("Email '{0}' is already registered")]
    DuplicateEmail(String),
}

impl IntoResponse for MemberError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateNickname(_) | Self::DuplicateEmail(_) => StatusCode::CONFLICT,
        };

        error_response(status, self.to_string())
    }
}
