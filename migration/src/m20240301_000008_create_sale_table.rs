use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240301_000001_create_user_table::User, m20240301_000003_create_platform_table::Platform,
    m20240301_000005_create_game_table::Game,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sale::Table)
                    .if_not_exists()
                    .col(pk_auto(Sale::Id))
                    .col(big_integer(Sale::Amount))
                    .col(integer(Sale::GameId))
                    .col(integer(Sale::PlatformId))
                    .col(
                        timestamp_with_time_zone(Sale::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer_null(Sale::CreatedByUserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sale_game_id")
                            .from(Sale::Table, Sale::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sale_platform_id")
                            .from(Sale::Table, Sale::PlatformId)
                            .to(Platform::Table, Platform::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sale_created_by_user_id")
                            .from(Sale::Table, Sale::CreatedByUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sale_game_id_platform_id")
                    .table(Sale::Table)
                    .col(Sale::GameId)
                    .col(Sale::PlatformId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sale::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Sale {
    Table,
    Id,
    Amount,
    GameId,
    PlatformId,
    CreatedAt,
    CreatedByUserId,
}
