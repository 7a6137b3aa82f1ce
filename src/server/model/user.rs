//! User accounts and roles.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::str::FromStr;

use crate::model::user::{CreateUserDto, RoleDto, UserDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Editor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Editor => "EDITOR",
        }
    }

    pub fn from_dto(dto: RoleDto) -> Self {
        match dto {
            RoleDto::Admin => Self::Admin,
            RoleDto::Editor => Self::Editor,
        }
    }

    pub fn into_dto(self) -> RoleDto {
        match self {
            Self::Admin => RoleDto::Admin,
            Self::Editor => RoleDto::Editor,
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "EDITOR" => Ok(Self::Editor),
            other => Err(format!("Unknown role '{}'", other)),
        }
    }
}

/// An account that can log in to the admin API.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    /// bcrypt hash, never serialized.
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - Converted domain model
    /// - `Err(DbErr::Custom)` - Stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = entity.role.parse::<Role>().map_err(DbErr::Custom)?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            password_hash: entity.password_hash,
            role,
            created_at: entity.created_at,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role.into_dto(),
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a user. The password is still in plain text here.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: Role,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            email: dto.email.trim().to_lowercase(),
            name: dto.name,
            password: dto.password,
            role: Role::from_dto(dto.role),
        }
    }
}
