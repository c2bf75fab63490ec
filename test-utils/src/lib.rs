//! Habiters Test Utils
//!
//! Shared testing utilities for the habiters server. Tests get an in-memory SQLite
//! database either with individual entity tables or with the full migrated schema
//! (unique indexes and the post full-text index included).
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Member;
//!
//! #[tokio::test]
//! async fn member_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_table(Member).build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
