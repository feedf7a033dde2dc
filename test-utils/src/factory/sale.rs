//! Sale factory for creating test sale entities.

use crate::factory::{game::create_game, platform::create_platform};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sales with customizable fields.
///
/// When no game or platform is supplied, `build()` creates them with defaults.
pub struct SaleFactory<'a> {
    db: &'a DatabaseConnection,
    amount: i64,
    game_id: Option<i32>,
    platform_id: Option<i32>,
    created_by_user_id: Option<i32>,
}

impl<'a> SaleFactory<'a> {
    /// Creates a new SaleFactory with an amount of 1000 and no creator.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            amount: 1000,
            game_id: None,
            platform_id: None,
            created_by_user_id: None,
        }
    }

    /// Sets the number of copies sold.
    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the game the sale belongs to.
    pub fn game(mut self, game_id: i32) -> Self {
        self.game_id = Some(game_id);
        self
    }

    /// Sets the platform the sale was made on.
    pub fn platform(mut self, platform_id: i32) -> Self {
        self.platform_id = Some(platform_id);
        self
    }

    /// Sets the user recorded as the sale's creator.
    pub fn created_by_user(mut self, user_id: i32) -> Self {
        self.created_by_user_id = Some(user_id);
        self
    }

    /// Builds and inserts the sale entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::sale::Model)` - Created sale entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::sale::Model, DbErr> {
        let game_id = match self.game_id {
            Some(id) => id,
            None => create_game(self.db).await?.id,
        };
        let platform_id = match self.platform_id {
            Some(id) => id,
            None => create_platform(self.db).await?.id,
        };

        entity::sale::ActiveModel {
            id: ActiveValue::NotSet,
            amount: ActiveValue::Set(self.amount),
            game_id: ActiveValue::Set(game_id),
            platform_id: ActiveValue::Set(platform_id),
            created_at: ActiveValue::Set(Utc::now()),
            created_by_user_id: ActiveValue::Set(self.created_by_user_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a sale, with its game and platform, using default values.
pub async fn create_sale(db: &DatabaseConnection) -> Result<entity::sale::Model, DbErr> {
    SaleFactory::new(db).build().await
}
