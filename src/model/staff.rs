use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::deserialize_some;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StaffDto {
    pub id: i32,
    pub team_id: Option<i32>,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateStaffDto {
    pub team_id: Option<i32>,
    pub name: String,
    pub role: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateStaffDto {
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub team_id: Option<Option<i32>>,
    pub name: Option<String>,
    pub role: Option<String>,
}
