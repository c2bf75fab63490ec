mod comment;
mod emoji;
mod habit;
mod habit_check;
mod member;
mod post;
