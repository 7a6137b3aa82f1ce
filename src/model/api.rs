use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct StatusDto {
    pub status: String,
}

/// Distinguishes an absent field from an explicit `null` in partial updates.
///
/// Use with `#[serde(default, deserialize_with = "deserialize_some")]` on an
/// `Option<Option<T>>`: absent gives `None`, `null` gives `Some(None)`.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
