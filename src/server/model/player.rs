use chrono::{DateTime, Utc};

use crate::model::player::{CreatePlayerDto, PlayerDto, UpdatePlayerDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    pub team_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: Option<i32>,
    pub position: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Player {
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            id: entity.id,
            team_id: entity.team_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            jersey_number: entity.jersey_number,
            position: entity.position,
            created_at: entity.created_at,
        }
    }

    /// Display name used in play-by-play and box scores.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            team_id: self.team_id,
            first_name: self.first_name,
            last_name: self.last_name,
            jersey_number: self.jersey_number,
            position: self.position,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePlayerParams {
    pub team_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: Option<i32>,
    pub position: Option<String>,
}

impl CreatePlayerParams {
    pub fn from_dto(dto: CreatePlayerDto) -> Self {
        Self {
            team_id: dto.team_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            jersey_number: dto.jersey_number,
            position: dto.position,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdatePlayerParams {
    pub id: i32,
    pub team_id: Option<Option<i32>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub jersey_number: Option<Option<i32>>,
    pub position: Option<Option<String>>,
}

impl UpdatePlayerParams {
    pub fn from_dto(id: i32, dto: UpdatePlayerDto) -> Self {
        Self {
            id,
            team_id: dto.team_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            jersey_number: dto.jersey_number,
            position: dto.position,
        }
    }
}
