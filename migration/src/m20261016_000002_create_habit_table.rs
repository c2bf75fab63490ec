use sea_orm_migration::{prelude::*, schema::*};

use super::m20261016_000001_create_member_table::Member;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Habit::Table)
                    .if_not_exists()
                    .col(pk_auto(Habit::Id))
                    .col(integer(Habit::MemberId))
                    .col(string(Habit::Title))
                    .col(text_null(Habit::Description))
                    .col(
                        timestamp_with_time_zone(Habit::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Habit::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_habit_member_id")
                            .from(Habit::Table, Habit::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_habit_member_id")
                    .table(Habit::Table)
                    .col(Habit::MemberId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Habit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Habit {
    Table,
    Id,
    MemberId,
    Title,
    Description,
    CreatedAt,
    UpdatedAt,
}
