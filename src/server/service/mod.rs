//! Service layer for business logic and orchestration.
//!
//! Services sit between controllers and repositories. They enforce ownership and
//! uniqueness rules, turn missing rows into domain errors, and open a transaction
//! for any operation that reads before it writes. A transaction that is dropped
//! without `commit()` rolls back, so every early return through `?` is safe.

pub mod auth;
pub mod comment;
pub mod emoji;
pub mod habit;
pub mod member;
pub mod post;
