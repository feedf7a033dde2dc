//! Game domain models and parameters.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::game::{CreateGameDto, GameDto, UpdateGameDto},
    server::{
        model::reference::{TitledRef, UserRef},
        query::filter::FilterPredicate,
    },
};

/// Game with its company, creator, platforms and genres attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub released_at: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub created_by_company: TitledRef,
    pub created_by_user: Option<UserRef>,
    pub platforms: Vec<TitledRef>,
    pub genres: Vec<TitledRef>,
}

impl Game {
    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            title: self.title,
            released_at: self.released_at,
            created_at: self.created_at,
            created_by_company: self.created_by_company.into(),
            created_by_user: self.created_by_user.map(UserRef::into_dto),
            platforms: self.platforms.into_iter().map(Into::into).collect(),
            genres: self.genres.into_iter().map(Into::into).collect(),
        }
    }
}

/// Parameters for creating a game.
///
/// Platform and genre ids are deduplicated; each must name an existing row.
#[derive(Debug, Clone)]
pub struct CreateGameParams {
    pub title: String,
    pub released_at: NaiveDate,
    pub created_by_company_id: i32,
    pub created_by_user_id: Option<i32>,
    pub platform_ids: BTreeSet<i32>,
    pub genre_ids: BTreeSet<i32>,
}

impl CreateGameParams {
    pub fn from_dto(dto: CreateGameDto, user_id: i32) -> Self {
        Self {
            title: dto.title,
            released_at: dto.released_at,
            created_by_company_id: dto.created_by_company_id,
            created_by_user_id: Some(user_id),
            platform_ids: dto.platform_ids.into_iter().collect(),
            genre_ids: dto.genre_ids.into_iter().collect(),
        }
    }
}

/// Partial update of a game.
///
/// `Some` relation sets replace the current links; `None` leaves them untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateGameParams {
    pub title: Option<String>,
    pub released_at: Option<NaiveDate>,
    pub created_by_company_id: Option<i32>,
    pub platform_ids: Option<BTreeSet<i32>>,
    pub genre_ids: Option<BTreeSet<i32>>,
}

impl UpdateGameParams {
    pub fn from_dto(dto: UpdateGameDto) -> Self {
        Self {
            title: dto.title,
            released_at: dto.released_at,
            created_by_company_id: dto.created_by_company_id,
            platform_ids: dto.platform_ids.map(|ids| ids.into_iter().collect()),
            genre_ids: dto.genre_ids.map(|ids| ids.into_iter().collect()),
        }
    }
}

/// Filters accepted by the game list endpoint.
#[derive(Debug, Clone, Default)]
pub struct GameFilter {
    pub title: Option<String>,
    pub created_by_user: Option<String>,
    /// Substring of the company title.
    pub created_by_company: Option<String>,
}

impl GameFilter {
    pub fn into_predicates(self) -> Vec<FilterPredicate> {
        let mut predicates = Vec::new();
        if let Some(title) = self.title {
            predicates.push(FilterPredicate::contains(entity::game::Column::Title, title));
        }
        if let Some(username) = self.created_by_user {
            predicates.push(FilterPredicate::related_contains(
                "created_by_user",
                entity::user::Column::Username,
                username,
            ));
        }
        if let Some(company) = self.created_by_company {
            predicates.push(FilterPredicate::related_contains(
                "created_by_company",
                entity::company::Column::Title,
                company,
            ));
        }
        predicates
    }
}
