//! Company domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::company::{CompanyDto, CreateCompanyDto, UpdateCompanyDto},
    server::{model::reference::UserRef, query::filter::FilterPredicate},
};

/// Developer or publisher that games are attributed to.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: i32,
    pub title: String,
    pub founded_at: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub created_by_user: Option<UserRef>,
}

impl Company {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The company row
    /// - `creator` - The user row referenced by `created_by_user_id`, if it still exists
    pub fn from_entity(
        entity: entity::company::Model,
        creator: Option<&entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            founded_at: entity.founded_at,
            created_at: entity.created_at,
            created_by_user: creator.map(UserRef::from_entity),
        }
    }

    pub fn into_dto(self) -> CompanyDto {
        CompanyDto {
            id: self.id,
            title: self.title,
            founded_at: self.founded_at,
            created_at: self.created_at,
            created_by_user: self.created_by_user.map(UserRef::into_dto),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCompanyParams {
    pub title: String,
    pub founded_at: NaiveDate,
    pub created_by_user_id: Option<i32>,
}

impl CreateCompanyParams {
    /// Builds creation parameters recording `user_id` as the creator.
    pub fn from_dto(dto: CreateCompanyDto, user_id: i32) -> Self {
        Self {
            title: dto.title,
            founded_at: dto.founded_at,
            created_by_user_id: Some(user_id),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCompanyParams {
    pub title: Option<String>,
    pub founded_at: Option<NaiveDate>,
}

impl UpdateCompanyParams {
    pub fn from_dto(dto: UpdateCompanyDto) -> Self {
        Self {
            title: dto.title,
            founded_at: dto.founded_at,
        }
    }
}

/// Filters accepted by the company list endpoint.
#[derive(Debug, Clone, Default)]
pub struct CompanyFilter {
    pub title: Option<String>,
    /// Substring of the creator's username.
    pub created_by_user: Option<String>,
}

impl CompanyFilter {
    pub fn into_predicates(self) -> Vec<FilterPredicate> {
        let mut predicates = Vec::new();
        if let Some(title) = self.title {
            predicates.push(FilterPredicate::contains(entity::company::Column::Title, title));
        }
        if let Some(username) = self.created_by_user {
            predicates.push(FilterPredicate::related_contains(
                "created_by_user",
                entity::user::Column::Username,
                username,
            ));
        }
        predicates
    }
}
