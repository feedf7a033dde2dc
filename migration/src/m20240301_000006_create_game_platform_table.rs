use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240301_000003_create_platform_table::Platform, m20240301_000005_create_game_table::Game,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GamePlatform::Table)
                    .if_not_exists()
                    .col(integer(GamePlatform::GameId))
                    .col(integer(GamePlatform::PlatformId))
                    .primary_key(
                        Index::create()
                            .col(GamePlatform::GameId)
                            .col(GamePlatform::PlatformId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_platform_game_id")
                            .from(GamePlatform::Table, GamePlatform::GameId)
                            .to(Game::Table, Game::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_platform_platform_id")
                            .from(GamePlatform::Table, GamePlatform::PlatformId)
                            .to(Platform::Table, Platform::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GamePlatform::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GamePlatform {
    Table,
    GameId,
    PlatformId,
}
