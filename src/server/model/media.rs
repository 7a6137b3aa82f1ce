//! Media library metadata.
//!
//! The bytes live in external storage; a record carries the public URL and the
//! details the CMS needs to render it.

use chrono::{DateTime, Utc};

use crate::{
    model::media::{CreateMediaDto, MediaDto, UpdateMediaDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    pub id: i32,
    pub url: String,
    pub filename: String,
    pub mime_type: String,
    pub alt_text: Option<String>,
    pub uploaded_by: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Media {
    pub fn from_entity(entity: entity::media::Model) -> Self {
        Self {
            id: entity.id,
            url: entity.url,
            filename: entity.filename,
            mime_type: entity.mime_type,
            alt_text: entity.alt_text,
            uploaded_by: entity.uploaded_by,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MediaDto {
        MediaDto {
            id: self.id,
            url: self.url,
            filename: self.filename,
            mime_type: self.mime_type,
            alt_text: self.alt_text,
            uploaded_by: self.uploaded_by,
            created_at: self.created_at,
        }
    }
}

/// Accepts absolute `http(s)` URLs and site-relative paths.
fn validate_url(url: &str) -> Result<(), AppError> {
    let valid = url.starts_with("https://") || url.starts_with("http://") || url.starts_with('/');
    if valid && !url.chars().any(char::is_whitespace) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Invalid media URL '{}': expected http(s):// or a path starting with /",
            url
        )))
    }
}

/// Accepts `type/subtype` with a non-empty token on each side.
fn validate_mime_type(mime_type: &str) -> Result<(), AppError> {
    let valid = match mime_type.split_once('/') {
        Some((kind, subtype)) => {
            !kind.is_empty()
                && !subtype.is_empty()
                && !subtype.contains('/')
                && !mime_type.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Invalid MIME type '{}'",
            mime_type
        )))
    }
}

#[derive(Debug, Clone)]
pub struct CreateMediaParams {
    pub url: String,
    pub filename: String,
    pub mime_type: String,
    pub alt_text: Option<String>,
    pub uploaded_by: Option<i32>,
}

impl CreateMediaParams {
    /// MIME types are stored lowercased.
    pub fn from_dto(dto: CreateMediaDto, uploaded_by: Option<i32>) -> Self {
        Self {
            url: dto.url.trim().to_string(),
            filename: dto.filename,
            mime_type: dto.mime_type.trim().to_ascii_lowercase(),
            alt_text: dto.alt_text,
            uploaded_by,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.filename.trim().is_empty() {
            return Err(AppError::BadRequest("Filename is required".to_string()));
        }
        validate_url(&self.url)?;
        validate_mime_type(&self.mime_type)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMediaParams {
    pub id: i32,
    pub filename: Option<String>,
    pub alt_text: Option<Option<String>>,
}

impl UpdateMediaParams {
    pub fn from_dto(id: i32, dto: UpdateMediaDto) -> Self {
        Self {
            id,
            filename: dto.filename,
            alt_text: dto.alt_text,
        }
    }
}

/// Optional filters for listing the media library.
#[derive(Debug, Clone, Default)]
pub struct MediaFilter {
    /// Matches a full MIME type (`image/png`) or a top-level type (`image`).
    pub mime_type: Option<String>,
}
