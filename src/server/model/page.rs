use chrono::{DateTime, Utc};

use crate::model::page::{CreatePageDto, PageDto, UpdatePageDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    pub fn from_entity(entity: entity::page::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            body: entity.body,
            published: entity.published,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PageDto {
        PageDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            body: self.body,
            published: self.published,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePageParams {
    pub title: String,
    pub slug: String,
    pub body: String,
    pub published: bool,
}

impl CreatePageParams {
    pub fn from_dto(dto: CreatePageDto) -> Self {
        Self {
            title: dto.title,
            slug: dto.slug,
            body: dto.body,
            published: dto.published,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePageParams {
    pub id: i32,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub body: Option<String>,
    pub published: Option<bool>,
}

impl UpdatePageParams {
    pub fn from_dto(id: i32, dto: UpdatePageDto) -> Self {
        Self {
            id,
            title: dto.title,
            slug: dto.slug,
            body: dto.body,
            published: dto.published,
        }
    }
}
