use chrono::{DateTime, Utc};

use crate::model::news::{CreateNewsArticleDto, NewsArticleDto, UpdateNewsArticleDto};

#[derive(Debug, Clone, PartialEq)]
pub struct NewsArticle {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewsArticle {
    pub fn from_entity(entity: entity::news_article::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            body: entity.body,
            published: entity.published,
            published_at: entity.published_at,
            author_id: entity.author_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> NewsArticleDto {
        NewsArticleDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            body: self.body,
            published: self.published,
            published_at: self.published_at,
            author_id: self.author_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating an article.
///
/// `published_at` defaults to the creation time when an article is created as
/// published without an explicit timestamp.
#[derive(Debug, Clone)]
pub struct CreateNewsArticleParams {
    pub title: String,
    pub slug: String,
    pub body: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: Option<i32>,
}

impl CreateNewsArticleParams {
    pub fn from_dto(dto: CreateNewsArticleDto, author_id: Option<i32>) -> Self {
        let published_at = match (dto.published, dto.published_at) {
            (true, None) => Some(Utc::now()),
            (_, at) => at,
        };

        Self {
            title: dto.title,
            slug: dto.slug,
            body: dto.body,
            published: dto.published,
            published_at,
            author_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateNewsArticleParams {
    pub id: i32,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub body: Option<String>,
    pub published: Option<bool>,
    pub published_at: Option<Option<DateTime<Utc>>>,
}

impl UpdateNewsArticleParams {
    pub fn from_dto(id: i32, dto: UpdateNewsArticleDto) -> Self {
        Self {
            id,
            title: dto.title,
            slug: dto.slug,
            body: dto.body,
            published: dto.published,
            published_at: dto.published_at,
        }
    }
}
