use crate::server::{
    data::habit::HabitRepository,
    model::habit::{CreateHabitParams, UpdateHabitParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_member;
mod update;
