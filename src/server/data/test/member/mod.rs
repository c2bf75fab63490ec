use crate::server::{
    data::member::MemberRepository,
    model::member::{RegisterMemberParams, UpdateMemberParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_nickname;
mod update;

fn register_params(nickname: &str) -> RegisterMemberParams {
    RegisterMemberParams {
        nickname: nickname.to_string(),
        email: format!("{}@habiters.test", nickname),
        profile_image_url: None,
        introduction: None,
    }
}
