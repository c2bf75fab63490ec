use crate::server::{data::emoji::EmojiRepository, model::emoji::AddEmojiParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_on_post;
