use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::deserialize_some;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerDto {
    pub id: i32,
    pub team_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: Option<i32>,
    pub position: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreatePlayerDto {
    pub team_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: Option<i32>,
    pub position: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdatePlayerDto {
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub team_id: Option<Option<i32>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub jersey_number: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub position: Option<Option<String>>,
}
