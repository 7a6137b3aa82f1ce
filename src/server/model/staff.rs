use chrono::{DateTime, Utc};

use crate::model::staff::{CreateStaffDto, StaffDto, UpdateStaffDto};

/// A coach, trainer or other team official.
#[derive(Debug, Clone, PartialEq)]
pub struct Staff {
    pub id: i32,
    pub team_id: Option<i32>,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl Staff {
    pub fn from_entity(entity: entity::staff::Model) -> Self {
        Self {
            id: entity.id,
            team_id: entity.team_id,
            name: entity.name,
            role: entity.role,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> StaffDto {
        StaffDto {
            id: self.id,
            team_id: self.team_id,
            name: self.name,
            role: self.role,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStaffParams {
    pub team_id: Option<i32>,
    pub name: String,
    pub role: String,
}

impl CreateStaffParams {
    pub fn from_dto(dto: CreateStaffDto) -> Self {
        Self {
            team_id: dto.team_id,
            name: dto.name,
            role: dto.role,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateStaffParams {
    pub id: i32,
    pub team_id: Option<Option<i32>>,
    pub name: Option<String>,
    pub role: Option<String>,
}

impl UpdateStaffParams {
    pub fn from_dto(id: i32, dto: UpdateStaffDto) -> Self {
        Self {
            id,
            team_id: dto.team_id,
            name: dto.name,
            role: dto.role,
        }
    }
}
