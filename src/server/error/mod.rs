//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by services and controllers. Domain
//! errors (`AuthError`, `MemberError`, `HabitError`) carry the offending value and
//! map their own status codes; the generic variants cover the remaining cases.

pub mod auth;
pub mod config;
pub mod habit;
pub mod member;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, habit::HabitError, member::MemberError,
    },
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Missing or invalid bearer token. Delegates to `AuthError::into_response()`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Member lookup or nickname conflict. Delegates to `MemberError::into_response()`.
    #[error(transparent)]
    MemberErr(#[from] MemberError),

    /// Habit lookup or check state conflict. Delegates to `HabitError::into_response()`.
    #[error(transparent)]
    HabitErr(#[from] HabitError),

    /// Database operation error from SeaORM, returned as 500.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or listener failure at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Query string that does not deserialize into the handler's parameters. Results in 400.
    #[error("Query rejected: {0}")]
    QueryRejection(#[from] QueryRejection),

    /// Request body that is not valid JSON for the handler's payload. Results in 400.
    #[error("Incoming JSON rejected: {0}")]
    JsonRejection(#[from] JsonRejection),

    /// Path segment that does not parse as the expected id. Results in 400.
    #[error("Path rejected: {0}")]
    PathRejection(#[from] PathRejection),

    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Results in 409 Conflict with the provided message.
    #[error("{0}")]
    Conflict(String),

    /// Authenticated member acting on a resource they do not own. Results in 403.
    #[error("{0}")]
    Forbidden(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::MemberErr(err) => err.into_response(),
            Self::HabitErr(err) => err.into_response(),
            Self::QueryRejection(rejection) => {
                error_response(StatusCode::BAD_REQUEST, rejection.body_text())
            }
            Self::JsonRejection(rejection) => {
                error_response(StatusCode::BAD_REQUEST, rejection.body_text())
            }
            Self::PathRejection(rejection) => {
                error_response(StatusCode::BAD_REQUEST, rejection.body_text())
            }
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            Self::Forbidden(msg) => error_response(StatusCode::FORBIDDEN, msg),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON `{"error": ...}` response with the given status.
pub(crate) fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorDto { error })).into_response()
}

/// Wraps any displayable error into a 500 response, logging the details server-side.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}

/// Returns true when the database rejected a write because of a unique index.
pub fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> ErrorDto {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn maps_generic_variants_to_status_codes() {
        let cases = [
            (AppError::NotFound("gone".into()), StatusCode::NOT_FOUND),
            (AppError::BadRequest("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::Conflict("taken".into()), StatusCode::CONFLICT),
            (AppError::Forbidden("nope".into()), StatusCode::FORBIDDEN),
        ];

        for (err, status) in cases {
            let message = err.to_string();
            let response = err.into_response();

            assert_eq!(response.status(), status);
            assert_eq!(body_of(response).await.error, message);
        }
    }

    #[tokio::test]
    async fn hides_database_error_details() {
        let response =
            AppError::DbErr(sea_orm::DbErr::Custom("connection reset".into())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await.error, "Internal server error");
    }
}
