use sea_orm_migration::{prelude::*, schema::*};

use super::{m20261016_000001_create_member_table::Member, m20261016_000004_create_post_table::Post};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Emoji::Table)
                    .if_not_exists()
                    .col(pk_auto(Emoji::Id))
                    .col(integer(Emoji::PostId))
                    .col(integer(Emoji::MemberId))
                    .col(string_len(Emoji::Kind, 32))
                    .col(
                        timestamp_with_time_zone(Emoji::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_emoji_post_id")
                            .from(Emoji::Table, Emoji::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_emoji_member_id")
                            .from(Emoji::Table, Emoji::MemberId)
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
                    .name("uq_emoji_post_id_member_id_kind")
                    .table(Emoji::Table)
                    .col(Emoji::PostId)
                    .col(Emoji::MemberId)
                    .col(Emoji::Kind)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Emoji::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Emoji {
    Table,
    Id,
    PostId,
    MemberId,
    Kind,
    CreatedAt,
}
