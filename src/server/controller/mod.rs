pub mod comment;
pub mod emoji;
pub mod extract;
pub mod habit;
pub mod member;
pub mod param;
pub mod post;
