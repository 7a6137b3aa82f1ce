use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::deserialize_some;

/// A media library entry. The file itself lives at `url`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MediaDto {
    pub id: i32,
    pub url: String,
    pub filename: String,
    pub mime_type: String,
    pub alt_text: Option<String>,
    pub uploaded_by: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateMediaDto {
    pub url: String,
    pub filename: String,
    pub mime_type: String,
    pub alt_text: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateMediaDto {
    pub filename: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub alt_text: Option<Option<String>>,
}
