use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::media::{CreateMediaParams, Media, MediaFilter, UpdateMediaParams};

pub struct MediaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MediaRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateMediaParams) -> Result<Media, DbErr> {
        let entity = entity::media::ActiveModel {
            url: ActiveValue::Set(params.url),
            filename: ActiveValue::Set(params.filename),
            mime_type: ActiveValue::Set(params.mime_type),
            alt_text: ActiveValue::Set(params.alt_text),
            uploaded_by: ActiveValue::Set(params.uploaded_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Media::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Media>, DbErr> {
        let entity = entity::prelude::Media::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Media::from_entity))
    }

    /// Gets the media library, newest first.
    ///
    /// A `mime_type` filter without a subtype (`image`) matches every subtype.
    pub async fn get_all(&self, filter: MediaFilter) -> Result<Vec<Media>, DbErr> {
        let mut query = entity::prelude::Media::find();
        match filter.mime_type {
            Some(mime_type) if mime_type.contains('/') => {
                query = query.filter(entity::media::Column::MimeType.eq(mime_type));
            }
            Some(kind) => {
                query = query
                    .filter(entity::media::Column::MimeType.starts_with(format!("{}/", kind)));
            }
            None => {}
        }

        let entities = query
            .order_by_desc(entity::media::Column::CreatedAt)
            .order_by_desc(entity::media::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Media::from_entity).collect())
    }

    pub async fn update(&self, params: UpdateMediaParams) -> Result<Media, DbErr> {
        let media = entity::prelude::Media::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Media {} not found",
                params.id
            )))?;

        let mut active_model: entity::media::ActiveModel = media.clone().into();

        if let Some(filename) = params.filename {
            active_model.filename = ActiveValue::Set(filename);
        }
        if let Some(alt_text) = params.alt_text {
            active_model.alt_text = ActiveValue::Set(alt_text);
        }

        if !active_model.is_changed() {
            return Ok(Media::from_entity(media));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Media::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Media::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
