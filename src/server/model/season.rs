use chrono::{DateTime, NaiveDate, Utc};

use crate::model::season::{CreateSeasonDto, SeasonDto, UpdateSeasonDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Season {
    pub id: i32,
    pub league_id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Season {
    pub fn from_entity(entity: entity::season::Model) -> Self {
        Self {
            id: entity.id,
            league_id: entity.league_id,
            name: entity.name,
            start_date: entity.start_date,
            end_date: entity.end_date,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> SeasonDto {
        SeasonDto {
            id: self.id,
            league_id: self.league_id,
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSeasonParams {
    pub league_id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
}

impl CreateSeasonParams {
    pub fn from_dto(dto: CreateSeasonDto) -> Self {
        Self {
            league_id: dto.league_id,
            name: dto.name,
            start_date: dto.start_date,
            end_date: dto.end_date,
            is_active: dto.is_active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSeasonParams {
    pub id: i32,
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<Option<NaiveDate>>,
    pub is_active: Option<bool>,
}

impl UpdateSeasonParams {
    pub fn from_dto(id: i32, dto: UpdateSeasonDto) -> Self {
        Self {
            id,
            name: dto.name,
            start_date: dto.start_date,
            end_date: dto.end_date,
            is_active: dto.is_active,
        }
    }
}
