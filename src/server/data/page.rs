use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::page::{CreatePageParams, Page, UpdatePageParams};

pub struct PageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePageParams) -> Result<Page, DbErr> {
        let now = Utc::now();
        let entity = entity::page::ActiveModel {
            title: ActiveValue::Set(params.title),
            slug: ActiveValue::Set(params.slug),
            body: ActiveValue::Set(params.body),
            published: ActiveValue::Set(params.published),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Page::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Page>, DbErr> {
        let entity = entity::prelude::Page::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Page::from_entity))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Page>, DbErr> {
        let entity = entity::prelude::Page::find()
            .filter(entity::page::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Page::from_entity))
    }

    /// Gets pages ordered by title.
    ///
    /// # Arguments
    /// - `published` - When set, only pages with that published flag
    pub async fn get_all(&self, published: Option<bool>) -> Result<Vec<Page>, DbErr> {
        let mut query = entity::prelude::Page::find();
        if let Some(published) = published {
            query = query.filter(entity::page::Column::Published.eq(published));
        }

        let entities = query
            .order_by_asc(entity::page::Column::Title)
            .order_by_asc(entity::page::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Page::from_entity).collect())
    }

    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Page::find().filter(entity::page::Column::Slug.eq(slug));
        if let Some(id) = exclude_id {
            query = query.filter(entity::page::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Updates the provided fields and bumps `updated_at`.
    pub async fn update(&self, params: UpdatePageParams) -> Result<Page, DbErr> {
        let page = entity::prelude::Page::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Page {} not found",
                params.id
            )))?;

        let mut active_model: entity::page::ActiveModel = page.into();

        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(slug) = params.slug {
            active_model.slug = ActiveValue::Set(slug);
        }
        if let Some(body) = params.body {
            active_model.body = ActiveValue::Set(body);
        }
        if let Some(published) = params.published {
            active_model.published = ActiveValue::Set(published);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Page::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Page::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
