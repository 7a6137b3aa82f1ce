use sea_orm::DatabaseConnection;

use crate::server::{
    data::media::MediaRepository,
    error::AppError,
    model::media::{CreateMediaParams, Media, MediaFilter, UpdateMediaParams},
};

pub struct MediaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MediaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an already stored file in the media library.
    ///
    /// # Returns
    /// - `Ok(Media)` - The new library entry
    /// - `Err(AppError::BadRequest)` - Blank filename, malformed URL or MIME type
    pub async fn create(&self, params: CreateMediaParams) -> Result<Media, AppError> {
        params.validate()?;

        let media = MediaRepository::new(self.db).create(params).await?;

        tracing::info!("Registered media {} ({})", media.id, media.mime_type);

        Ok(media)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Media, AppError> {
        MediaRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Media {} not found", id)))
    }

    pub async fn get_all(&self, filter: MediaFilter) -> Result<Vec<Media>, AppError> {
        Ok(MediaRepository::new(self.db).get_all(filter).await?)
    }

    /// Renames the entry or changes its alt text. The URL and type are fixed.
    pub async fn update(&self, params: UpdateMediaParams) -> Result<Media, AppError> {
        self.get_by_id(params.id).await?;

        if let Some(filename) = &params.filename {
            if filename.trim().is_empty() {
                return Err(AppError::BadRequest("Filename is required".to_string()));
            }
        }

        Ok(MediaRepository::new(self.db).update(params).await?)
    }

    /// Removes the library entry. The stored file is left to the storage backend.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MediaRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Media {} not found", id)));
        }

        Ok(())
    }
}
