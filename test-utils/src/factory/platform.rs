//! Platform factory for creating test platform entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test platforms with customizable fields.
pub struct PlatformFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    created_by_user_id: Option<i32>,
}

impl<'a> PlatformFactory<'a> {
    /// Creates a new PlatformFactory titled `"Platform {id}"` with no creator.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Platform {}", next_id()),
            created_by_user_id: None,
        }
    }

    /// Sets the platform title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the user recorded as the platform's creator.
    pub fn created_by_user(mut self, user_id: i32) -> Self {
        self.created_by_user_id = Some(user_id);
        self
    }

    /// Builds and inserts the platform entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::platform::Model)` - Created platform entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::platform::Model, DbErr> {
        entity::platform::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            created_at: ActiveValue::Set(Utc::now()),
            created_by_user_id: ActiveValue::Set(self.created_by_user_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a platform with default values.
pub async fn create_platform(db: &DatabaseConnection) -> Result<entity::platform::Model, DbErr> {
    PlatformFactory::new(db).build().await
}
