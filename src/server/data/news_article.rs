use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::news::{CreateNewsArticleParams, NewsArticle, UpdateNewsArticleParams};

pub struct NewsArticleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NewsArticleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNewsArticleParams) -> Result<NewsArticle, DbErr> {
        let now = Utc::now();
        let entity = entity::news_article::ActiveModel {
            title: ActiveValue::Set(params.title),
            slug: ActiveValue::Set(params.slug),
            body: ActiveValue::Set(params.body),
            published: ActiveValue::Set(params.published),
            published_at: ActiveValue::Set(params.published_at),
            author_id: ActiveValue::Set(params.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(NewsArticle::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<NewsArticle>, DbErr> {
        let entity = entity::prelude::NewsArticle::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(NewsArticle::from_entity))
    }

    /// Gets articles, newest first.
    ///
    /// Published articles sort by `published_at`; the creation time breaks ties
    /// and orders drafts.
    ///
    /// # Arguments
    /// - `published` - When set, only articles with that published flag
    pub async fn get_all(&self, published: Option<bool>) -> Result<Vec<NewsArticle>, DbErr> {
        let mut query = entity::prelude::NewsArticle::find();
        if let Some(published) = published {
            query = query.filter(entity::news_article::Column::Published.eq(published));
        }

        let entities = query
            .order_by_desc(entity::news_article::Column::PublishedAt)
            .order_by_desc(entity::news_article::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(NewsArticle::from_entity).collect())
    }

    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::NewsArticle::find()
            .filter(entity::news_article::Column::Slug.eq(slug));
        if let Some(id) = exclude_id {
            query = query.filter(entity::news_article::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Updates the provided fields and bumps `updated_at`.
    pub async fn update(&self, params: UpdateNewsArticleParams) -> Result<NewsArticle, DbErr> {
        let article = entity::prelude::NewsArticle::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "News article {} not found",
                params.id
            )))?;

        let mut active_model: entity::news_article::ActiveModel = article.into();

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
        if let Some(published_at) = params.published_at {
            active_model.published_at = ActiveValue::Set(published_at);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(NewsArticle::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::NewsArticle::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
