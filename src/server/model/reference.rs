//! Lightweight references to related records embedded in domain models.

use crate::model::{
    company::CompanySummaryDto, game::GameSummaryDto, genre::GenreSummaryDto,
    platform::PlatformSummaryDto, user::UserSummaryDto,
};

/// Reference to a user by id and username.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRef {
    pub id: i32,
    pub username: String,
}

impl UserRef {
    pub fn from_entity(entity: &entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username.clone(),
        }
    }

    pub fn into_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            username: self.username,
        }
    }
}

/// Reference to any titled record (company, platform, genre or game).
#[derive(Debug, Clone, PartialEq)]
pub struct TitledRef {
    pub id: i32,
    pub title: String,
}

impl TitledRef {
    pub fn new(id: i32, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
        }
    }
}

impl From<TitledRef> for CompanySummaryDto {
    fn from(reference: TitledRef) -> Self {
        Self {
            id: reference.id,
            title: reference.title,
        }
    }
}

impl From<TitledRef> for PlatformSummaryDto {
    fn from(reference: TitledRef) -> Self {
        Self {
            id: reference.id,
            title: reference.title,
        }
    }
}

impl From<TitledRef> for GenreSummaryDto {
    fn from(reference: TitledRef) -> Self {
        Self {
            id: reference.id,
            title: reference.title,
        }
    }
}

impl From<TitledRef> for GameSummaryDto {
    fn from(reference: TitledRef) -> Self {
        Self {
            id: reference.id,
            title: reference.title,
        }
    }
}
