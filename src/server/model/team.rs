use chrono::{DateTime, Utc};

use crate::model::team::{CreateTeamDto, TeamDto, UpdateTeamDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub league_id: Option<i32>,
    pub name: String,
    pub short_name: String,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Team {
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            league_id: entity.league_id,
            name: entity.name,
            short_name: entity.short_name,
            logo_url: entity.logo_url,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            league_id: self.league_id,
            name: self.name,
            short_name: self.short_name,
            logo_url: self.logo_url,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub league_id: Option<i32>,
    pub name: String,
    pub short_name: String,
    pub logo_url: Option<String>,
}

impl CreateTeamParams {
    pub fn from_dto(dto: CreateTeamDto) -> Self {
        Self {
            league_id: dto.league_id,
            name: dto.name,
            short_name: dto.short_name,
            logo_url: dto.logo_url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateTeamParams {
    pub id: i32,
    pub league_id: Option<Option<i32>>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub logo_url: Option<Option<String>>,
}

impl UpdateTeamParams {
    pub fn from_dto(id: i32, dto: UpdateTeamDto) -> Self {
        Self {
            id,
            league_id: dto.league_id,
            name: dto.name,
            short_name: dto.short_name,
            logo_url: dto.logo_url,
        }
    }
}
