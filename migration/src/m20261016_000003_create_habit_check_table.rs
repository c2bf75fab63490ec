use sea_orm_migration::{prelude::*, schema::*};

use super::m20261016_000002_create_habit_table::Habit;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HabitCheck::Table)
                    .if_not_exists()
                    .col(pk_auto(HabitCheck::Id))
                    .col(integer(HabitCheck::HabitId))
                    .col(date(HabitCheck::CheckDate))
                    .col(
                        timestamp_with_time_zone(HabitCheck::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_habit_check_habit_id")
                            .from(HabitCheck::Table, HabitCheck::HabitId)
                            .to(Habit::Table, Habit::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One completion mark per habit per day
        manager
            .create_index(
                Index::create()
                    .name("uq_habit_check_habit_id_check_date")
                    .table(HabitCheck::Table)
                    .col(HabitCheck::HabitId)
                    .col(HabitCheck::CheckDate)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HabitCheck::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HabitCheck {
    Table,
    Id,
    HabitId,
    CheckDate,
    CreatedAt,
}
