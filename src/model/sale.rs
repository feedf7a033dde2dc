use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{game::GameSummaryDto, platform::PlatformSummaryDto, user::UserSummaryDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SaleDto {
    pub id: i32,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
    pub game: GameSummaryDto,
    pub platform: PlatformSummaryDto,
    pub created_by_user: Option<UserSummaryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSaleDto {
    pub amount: i64,
    pub game_id: i32,
    pub platform_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateSaleDto {
    pub amount: Option<i64>,
    pub game_id: Option<i32>,
    pub platform_id: Option<i32>,
}
