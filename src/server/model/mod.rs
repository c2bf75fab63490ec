//! Domain models and operation parameters.
//!
//! Repositories convert entity models into these types at the data layer boundary,
//! services pass them around, and controllers turn them into DTOs. Parameter types
//! are built from DTOs with `from_dto`, which is also where request fields are
//! validated and normalized.

pub mod comment;
pub mod emoji;
pub mod habit;
pub mod member;
pub mod post;
