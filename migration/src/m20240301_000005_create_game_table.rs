use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240301_000001_create_user_table::User, m20240301_000002_create_company_table::Company,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(string_uniq(Game::Title))
                    .col(date(Game::ReleasedAt))
                    .col(
                        timestamp_with_time_zone(Game::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(Game::CreatedByCompanyId))
                    .col(integer_null(Game::CreatedByUserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_created_by_company_id")
                            .from(Game::Table, Game::CreatedByCompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_created_by_user_id")
                            .from(Game::Table, Game::CreatedByUserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    Title,
    ReleasedAt,
    CreatedAt,
    CreatedByCompanyId,
    CreatedByUserId,
}
