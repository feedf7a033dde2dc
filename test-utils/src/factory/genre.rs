//! Genre factory for creating test genre entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test genres with customizable fields.
pub struct GenreFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    created_by_user_id: Option<i32>,
}

impl<'a> GenreFactory<'a> {
    /// Creates a new GenreFactory titled `"Genre {id}"` with no creator.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Genre {}", next_id()),
            created_by_user_id: None,
        }
    }

    /// Sets the genre title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the user recorded as the genre's creator.
    pub fn created_by_user(mut self, user_id: i32) -> Self {
        self.created_by_user_id = Some(user_id);
        self
    }

    /// Builds and inserts the genre entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::genre::Model)` - Created genre entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::genre::Model, DbErr> {
        entity::genre::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            created_at: ActiveValue::Set(Utc::now()),
            created_by_user_id: ActiveValue::Set(self.created_by_user_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a genre with default values.
pub async fn create_genre(db: &DatabaseConnection) -> Result<entity::genre::Model, DbErr> {
    GenreFactory::new(db).build().await
}
