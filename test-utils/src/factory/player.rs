//! Player factory for creating test player entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players.
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: Option<i32>,
    first_name: String,
    last_name: String,
    jersey_number: Option<i32>,
    position: Option<String>,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Player"`
    /// - last_name: `"{id}"`
    /// - jersey_number: `id % 100`
    /// - position: `None`
    pub fn new(db: &'a DatabaseConnection, team_id: Option<i32>) -> Self {
        let id = next_id();
        Self {
            db,
            team_id,
            first_name: "Player".to_string(),
            last_name: id.to_string(),
            jersey_number: Some((id % 100) as i32),
            position: None,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn jersey_number(mut self, jersey_number: Option<i32>) -> Self {
        self.jersey_number = jersey_number;
        self
    }

    pub fn position(mut self, position: Option<String>) -> Self {
        self.position = position;
        self
    }

    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            team_id: ActiveValue::Set(self.team_id),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            jersey_number: ActiveValue::Set(self.jersey_number),
            position: ActiveValue::Set(self.position),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values, optionally on a team.
pub async fn create_player(
    db: &DatabaseConnection,
    team_id: Option<i32>,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db, team_id).build().await
}
