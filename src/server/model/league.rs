use chrono::{DateTime, Utc};

use crate::model::league::{CreateLeagueDto, LeagueDto, UpdateLeagueDto};

#[derive(Debug, Clone, PartialEq)]
pub struct League {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl League {
    pub fn from_entity(entity: entity::league::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            description: entity.description,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> LeagueDto {
        LeagueDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLeagueParams {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl CreateLeagueParams {
    pub fn from_dto(dto: CreateLeagueDto) -> Self {
        Self {
            name: dto.name,
            slug: dto.slug,
            description: dto.description,
        }
    }
}

/// Only provided fields are updated.
#[derive(Debug, Clone)]
pub struct UpdateLeagueParams {
    pub id: i32,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<Option<String>>,
}

impl UpdateLeagueParams {
    pub fn from_dto(id: i32, dto: UpdateLeagueDto) -> Self {
        Self {
            id,
            name: dto.name,
            slug: dto.slug,
            description: dto.description,
        }
    }
}
