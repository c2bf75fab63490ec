use crate::server::{data::comment::CommentRepository, model::comment::CreateCommentParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_post;
mod find_replies;
mod update_content;
