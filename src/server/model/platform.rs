//! Platform domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::platform::{CreatePlatformDto, PlatformDto, UpdatePlatformDto},
    server::{model::reference::UserRef, query::filter::FilterPredicate},
};

/// Hardware or store a game is released on.
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub id: i32,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub created_by_user: Option<UserRef>,
}

impl Platform {
    pub fn from_entity(
        entity: entity::platform::Model,
        creator: Option<&entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            created_at: entity.created_at,
            created_by_user: creator.map(UserRef::from_entity),
        }
    }

    pub fn into_dto(self) -> PlatformDto {
        PlatformDto {
            id: self.id,
            title: self.title,
            created_at: self.created_at,
            created_by_user: self.created_by_user.map(UserRef::into_dto),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePlatformParams {
    pub title: String,
    pub created_by_user_id: Option<i32>,
}

impl CreatePlatformParams {
    pub fn from_dto(dto: CreatePlatformDto, user_id: i32) -> Self {
        Self {
            title: dto.title,
            created_by_user_id: Some(user_id),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePlatformParams {
    pub title: Option<String>,
}

impl UpdatePlatformParams {
    pub fn from_dto(dto: UpdatePlatformDto) -> Self {
        Self { title: dto.title }
    }
}

/// Filters accepted by the platform list endpoint.
#[derive(Debug, Clone, Default)]
pub struct PlatformFilter {
    pub title: Option<String>,
    pub created_by_user: Option<String>,
}

impl PlatformFilter {
    pub fn into_predicates(self) -> Vec<FilterPredicate> {
        let mut predicates = Vec::new();
        if let Some(title) = self.title {
            predicates.push(FilterPredicate::contains(entity::platform::Column::Title, title));
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
