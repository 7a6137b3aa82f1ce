//! Media library factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct MediaFactory<'a> {
    db: &'a DatabaseConnection,
    url: String,
    filename: String,
    mime_type: String,
    alt_text: Option<String>,
    uploaded_by: Option<i32>,
    created_at: DateTime<Utc>,
}

impl<'a> MediaFactory<'a> {
    /// Defaults to a PNG at `/uploads/media-{id}.png` with no uploader.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            url: format!("/uploads/media-{}.png", id),
            filename: format!("media-{}.png", id),
            mime_type: "image/png".to_string(),
            alt_text: None,
            uploaded_by: None,
            created_at: Utc::now(),
        }
    }

    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn uploaded_by(mut self, user_id: Option<i32>) -> Self {
        self.uploaded_by = user_id;
        self
    }

    pub fn alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::media::Model, DbErr> {
        entity::media::ActiveModel {
            url: ActiveValue::Set(self.url),
            filename: ActiveValue::Set(self.filename),
            mime_type: ActiveValue::Set(self.mime_type),
            alt_text: ActiveValue::Set(self.alt_text),
            uploaded_by: ActiveValue::Set(self.uploaded_by),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a PNG media entry with default values.
pub async fn create_media(db: &DatabaseConnection) -> Result<entity::media::Model, DbErr> {
    MediaFactory::new(db).build().await
}
