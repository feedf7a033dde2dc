//! Sale domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::sale::{CreateSaleDto, SaleDto, UpdateSaleDto},
    server::{
        model::reference::{TitledRef, UserRef},
        query::filter::{FilterOp, FilterPredicate},
    },
};

/// Copies of one game sold on one platform.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub id: i32,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
    pub game: TitledRef,
    pub platform: TitledRef,
    pub created_by_user: Option<UserRef>,
}

impl Sale {
    pub fn into_dto(self) -> SaleDto {
        SaleDto {
            id: self.id,
            amount: self.amount,
            created_at: self.created_at,
            game: self.game.into(),
            platform: self.platform.into(),
            created_by_user: self.created_by_user.map(UserRef::into_dto),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSaleParams {
    pub amount: i64,
    pub game_id: i32,
    pub platform_id: i32,
    pub created_by_user_id: Option<i32>,
}

impl CreateSaleParams {
    pub fn from_dto(dto: CreateSaleDto, user_id: i32) -> Self {
        Self {
            amount: dto.amount,
            game_id: dto.game_id,
            platform_id: dto.platform_id,
            created_by_user_id: Some(user_id),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSaleParams {
    pub amount: Option<i64>,
    pub game_id: Option<i32>,
    pub platform_id: Option<i32>,
}

impl UpdateSaleParams {
    pub fn from_dto(dto: UpdateSaleDto) -> Self {
        Self {
            amount: dto.amount,
            game_id: dto.game_id,
            platform_id: dto.platform_id,
        }
    }
}

/// Filters accepted by the sale list endpoint.
#[derive(Debug, Clone, Default)]
pub struct SaleFilter {
    /// Substring of the game title.
    pub game: Option<String>,
    /// Substring of the platform title.
    pub platform: Option<String>,
    pub created_by_user: Option<String>,
    pub min_amount: Option<i64>,
    pub max_amount: Option<i64>,
}

impl SaleFilter {
    pub fn into_predicates(self) -> Vec<FilterPredicate> {
        use entity::sale::Column;

        let mut predicates = Vec::new();
        if let Some(game) = self.game {
            predicates.push(FilterPredicate::related_contains(
                "game",
                entity::game::Column::Title,
                game,
            ));
        }
        if let Some(platform) = self.platform {
            predicates.push(FilterPredicate::related_contains(
                "platform",
                entity::platform::Column::Title,
                platform,
            ));
        }
        if let Some(username) = self.created_by_user {
            predicates.push(FilterPredicate::related_contains(
                "created_by_user",
                entity::user::Column::Username,
                username,
            ));
        }
        if let Some(min) = self.min_amount {
            predicates.push(FilterPredicate::on(Column::Amount, FilterOp::Gte(min.into())));
        }
        if let Some(max) = self.max_amount {
            predicates.push(FilterPredicate::on(Column::Amount, FilterOp::Lte(max.into())));
        }
        predicates
    }
}
