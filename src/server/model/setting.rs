use chrono::{DateTime, Utc};

use crate::model::setting::SettingDto;

/// A site-wide key/value setting such as the site title.
#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl Setting {
    pub fn from_entity(entity: entity::setting::Model) -> Self {
        Self {
            key: entity.key,
            value: entity.value,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> SettingDto {
        SettingDto {
            key: self.key,
            value: self.value,
            updated_at: self.updated_at,
        }
    }
}
