//! Request and response DTOs shared by the HTTP layer.
//!
//! Everything here is plain serde data with `utoipa` schemas attached; conversion
//! to and from domain models lives in `server::model`.

pub mod api;
pub mod comment;
pub mod emoji;
pub mod habit;
pub mod member;
pub mod post;
