pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_user_table;
mod m20240301_000002_create_company_table;
mod m20240301_000003_create_platform_table;
mod m20240301_000004_create_genre_table;
mod m20240301_000005_create_game_table;
mod m20240301_000006_create_game_platform_table;
mod m20240301_000007_create_game_genre_table;
mod m20240301_000008_create_sale_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_user_table::Migration),
            Box::new(m20240301_000002_create_company_table::Migration),
            Box::new(m20240301_000003_create_platform_table::Migration),
            Box::new(m20240301_000004_create_genre_table::Migration),
            Box::new(m20240301_000005_create_game_table::Migration),
            Box::new(m20240301_000006_create_game_platform_table::Migration),
            Box::new(m20240301_000007_create_game_genre_table::Migration),
            Box::new(m20240301_000008_create_sale_table::Migration),
        ]
    }
}
