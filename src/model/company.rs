use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompanyDto {
    pub id: i32,
    pub title: String,
    pub founded_at: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub created_by_user: Option<UserSummaryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompanySummaryDto {
    pub id: i32,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCompanyDto {
    pub title: String,
    pub founded_at: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCompanyDto {
    pub title: Option<String>,
    pub founded_at: Option<NaiveDate>,
}
