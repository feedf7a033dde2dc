//! Company factory for creating test company entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test companies with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::company::CompanyFactory;
///
/// let company = CompanyFactory::new(&db)
///     .title("Valve")
///     .created_by_user(user.id)
///     .build()
///     .await?;
/// ```
pub struct CompanyFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    founded_at: NaiveDate,
    created_by_user_id: Option<i32>,
}

impl<'a> CompanyFactory<'a> {
    /// Creates a new CompanyFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Company {id}"` where id is auto-incremented
    /// - founded_at: 2000-01-01
    /// - created_by_user_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CompanyFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Company {}", id),
            founded_at: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
            created_by_user_id: None,
        }
    }

    /// Sets the company title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the founding date.
    pub fn founded_at(mut self, founded_at: NaiveDate) -> Self {
        self.founded_at = founded_at;
        self
    }

    /// Sets the user recorded as the company's creator.
    pub fn created_by_user(mut self, user_id: i32) -> Self {
        self.created_by_user_id = Some(user_id);
        self
    }

    /// Builds and inserts the company entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::company::Model)` - Created company entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::company::Model, DbErr> {
        entity::company::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            founded_at: ActiveValue::Set(self.founded_at),
            created_at: ActiveValue::Set(Utc::now()),
            created_by_user_id: ActiveValue::Set(self.created_by_user_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a company with default values.
///
/// Shorthand for `CompanyFactory::new(db).build().await`.
pub async fn create_company(db: &DatabaseConnection) -> Result<entity::company::Model, DbErr> {
    CompanyFactory::new(db).build().await
}
