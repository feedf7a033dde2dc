//! Genre domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::genre::{CreateGenreDto, GenreDto, UpdateGenreDto},
    server::{model::reference::UserRef, query::filter::FilterPredicate},
};

/// Category games are tagged with.
#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: i32,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub created_by_user: Option<UserRef>,
}

impl Genre {
    pub fn from_entity(
        entity: entity::genre::Model,
        creator: Option<&entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            created_at: entity.created_at,
            created_by_user: creator.map(UserRef::from_entity),
        }
    }

    pub fn into_dto(self) -> GenreDto {
        GenreDto {
            id: self.id,
            title: self.title,
            created_at: self.created_at,
            created_by_user: self.created_by_user.map(UserRef::into_dto),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGenreParams {
    pub title: String,
    pub created_by_user_id: Option<i32>,
}

impl CreateGenreParams {
    pub fn from_dto(dto: CreateGenreDto, user_id: i32) -> Self {
        Self {
            title: dto.title,
            created_by_user_id: Some(user_id),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateGenreParams {
    pub title: Option<String>,
}

impl UpdateGenreParams {
    pub fn from_dto(dto: UpdateGenreDto) -> Self {
        Self { title: dto.title }
    }
}

/// Filters accepted by the genre list endpoint.
#[derive(Debug, Clone, Default)]
pub struct GenreFilter {
    pub title: Option<String>,
    pub created_by_user: Option<String>,
}

impl GenreFilter {
    pub fn into_predicates(self) -> Vec<FilterPredicate> {
        let mut predicates = Vec::new();
        if let Some(title) = self.title {
            predicates.push(FilterPredicate::contains(entity::genre::Column::Title, title));
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
