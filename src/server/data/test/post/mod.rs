use crate::{
    model::post::{Category, SearchType},
    server::{
        data::post::PostRepository,
        model::post::{CreatePostParams, PostSearchParams, UpdatePostParams},
    },
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_with_author;
mod increment_views;
mod search;
mod update;
