//! Factory methods for creating test data.
//!
//! Each entity has a builder-style `*Factory` for customized rows and a `create_*`
//! shorthand for defaults. Unique columns default to values derived from a global
//! counter so repeated calls never collide.
//!
//! ```rust,ignore
//! let member = factory::create_member(db).await?;
//! let post = factory::post::PostFactory::new(db, member.id)
//!     .title("Morning run")
//!     .category("EXERCISE")
//!     .build()
//!     .await?;
//! ```

pub mod comment;
pub mod emoji;
pub mod habit;
pub mod habit_check;
pub mod helpers;
pub mod member;
pub mod post;

pub use comment::{create_comment, create_reply};
pub use emoji::create_emoji;
pub use habit::create_habit;
pub use habit_check::create_habit_check;
pub use member::create_member;
pub use post::create_post;
