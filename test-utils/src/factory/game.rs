//! Game factory for creating test game entities.

use crate::factory::{company::create_company, helpers::next_id};
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games with customizable fields.
///
/// When no company is supplied, `build()` creates one with defaults.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::game::GameFactory;
///
/// let game = GameFactory::new(&db)
///     .title("Portal")
///     .company(company.id)
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    released_at: NaiveDate,
    company_id: Option<i32>,
    created_by_user_id: Option<i32>,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Game {id}"` where id is auto-incremented
    /// - released_at: 2010-06-15
    /// - company: a freshly created default company
    /// - created_by_user_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GameFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Game {}", next_id()),
            released_at: NaiveDate::from_ymd_opt(2010, 6, 15).unwrap_or_default(),
            company_id: None,
            created_by_user_id: None,
        }
    }

    /// Sets the game title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the release date.
    pub fn released_at(mut self, released_at: NaiveDate) -> Self {
        self.released_at = released_at;
        self
    }

    /// Sets the company that made the game.
    pub fn company(mut self, company_id: i32) -> Self {
        self.company_id = Some(company_id);
        self
    }

    /// Sets the user recorded as the game's creator.
    pub fn created_by_user(mut self, user_id: i32) -> Self {
        self.created_by_user_id = Some(user_id);
        self
    }

    /// Builds and inserts the game entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game::Model)` - Created game entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        let company_id = match self.company_id {
            Some(id) => id,
            None => create_company(self.db).await?.id,
        };

        entity::game::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            released_at: ActiveValue::Set(self.released_at),
            created_at: ActiveValue::Set(Utc::now()),
            created_by_company_id: ActiveValue::Set(company_id),
            created_by_user_id: ActiveValue::Set(self.created_by_user_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game, and its company, with default values.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}
