//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM queries for one aggregate each and convert entity models
//! into domain models at this boundary. They are generic over `ConnectionTrait` so a
//! service can hand them either the pool or an open transaction.

pub mod comment;
pub mod emoji;
pub mod habit;
pub mod habit_check;
pub mod member;
pub mod post;

#[cfg(test)]
mod test;
