use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::deserialize_some;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub league_id: Option<i32>,
    pub name: String,
    pub short_name: String,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateTeamDto {
    pub league_id: Option<i32>,
    pub name: String,
    pub short_name: String,
    pub logo_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateTeamDto {
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub league_id: Option<Option<i32>>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub logo_url: Option<Option<String>>,
}
