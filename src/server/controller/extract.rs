//! Request extractors whose rejections render as `AppError` JSON bodies.
//!
//! Axum's own `Query`, `Path` and `Json` reject with plain-text responses. These
//! wrappers run the same extraction and convert the rejection into
//! `AppError`, so a malformed query string, path segment or body produces the
//! usual `{"error": ...}` payload with status 400.

use axum::{
    extract::{FromRequest, FromRequestParts},
    response::{IntoResponse, Response},
};

use crate::server::error::AppError;

/// Query string extractor.
#[derive(FromRequestParts, Debug, Clone, Copy, Default)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);

/// Path parameter extractor.
#[derive(FromRequestParts, Debug, Clone, Copy, Default)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

/// JSON body extractor and response.
#[derive(FromRequest, Debug, Clone, Copy, Default)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: serde::Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
