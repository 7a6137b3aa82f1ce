use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::deserialize_some;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SeasonDto {
    pub id: i32,
    pub league_id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateSeasonDto {
    pub league_id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateSeasonDto {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<NaiveDate>)]
    pub end_date: Option<Option<NaiveDate>>,
    pub is_active: Option<bool>,
}
