use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    company::CompanySummaryDto, genre::GenreSummaryDto, platform::PlatformSummaryDto,
    user::UserSummaryDto,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameDto {
    pub id: i32,
    pub title: String,
    pub released_at: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub created_by_company: CompanySummaryDto,
    pub created_by_user: Option<UserSummaryDto>,
    pub platforms: Vec<PlatformSummaryDto>,
    pub genres: Vec<GenreSummaryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GameSummaryDto {
    pub id: i32,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateGameDto {
    pub title: String,
    pub released_at: NaiveDate,
    pub created_by_company_id: i32,
    #[serde(default)]
    pub platform_ids: Vec<i32>,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
}

/// Partial game update.
///
/// `platform_ids` and `genre_ids` replace the whole set when present and leave it untouched
/// when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateGameDto {
    pub title: Option<String>,
    pub released_at: Option<NaiveDate>,
    pub created_by_company_id: Option<i32>,
    pub platform_ids: Option<Vec<i32>>,
    pub genre_ids: Option<Vec<i32>>,
}
