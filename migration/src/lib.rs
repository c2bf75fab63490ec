pub use sea_orm_migration::prelude::*;

mod m20261016_000001_create_member_table;
mod m20261016_000002_create_habit_table;
mod m20261016_000003_create_habit_check_table;
mod m20261016_000004_create_post_table;
mod m20261016_000005_create_comment_table;
mod m20261016_000006_create_emoji_table;
mod m20261016_000007_create_post_search_index;

pub use m20261016_000007_create_post_search_index::POST_FTS_TABLE;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_create_member_table::Migration),
            Box::new(m20261016_000002_create_habit_table::Migration),
            Box::new(m20261016_000003_create_habit_check_table::Migration),
            Box::new(m20261016_000004_create_post_table::Migration),
            Box::new(m20261016_000005_create_comment_table::Migration),
            Box::new(m20261016_000006_create_emoji_table::Migration),
            Box::new(m20261016_000007_create_post_search_index::Migration),
        ]
    }
}
