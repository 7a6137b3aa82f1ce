//! Match roster factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for adding a player to a match roster.
pub struct MatchPlayerFactory<'a> {
    db: &'a DatabaseConnection,
    match_id: i32,
    player_id: i32,
    team_id: i32,
    jersey_number: Option<i32>,
    is_starter: bool,
    on_court: bool,
}

impl<'a> MatchPlayerFactory<'a> {
    /// Defaults to a bench player with no jersey number override.
    pub fn new(db: &'a DatabaseConnection, match_id: i32, player_id: i32, team_id: i32) -> Self {
        Self {
            db,
            match_id,
            player_id,
            team_id,
            jersey_number: None,
            is_starter: false,
            on_court: false,
        }
    }

    pub fn jersey_number(mut self, jersey_number: Option<i32>) -> Self {
        self.jersey_number = jersey_number;
        self
    }

    pub fn is_starter(mut self, is_starter: bool) -> Self {
        self.is_starter = is_starter;
        self
    }

    pub fn on_court(mut self, on_court: bool) -> Self {
        self.on_court = on_court;
        self
    }

    pub async fn build(self) -> Result<entity::match_player::Model, DbErr> {
        entity::match_player::ActiveModel {
            match_id: ActiveValue::Set(self.match_id),
            player_id: ActiveValue::Set(self.player_id),
            team_id: ActiveValue::Set(self.team_id),
            jersey_number: ActiveValue::Set(self.jersey_number),
            is_starter: ActiveValue::Set(self.is_starter),
            on_court: ActiveValue::Set(self.on_court),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Adds a bench player to the match roster.
pub async fn create_match_player(
    db: &DatabaseConnection,
    match_id: i32,
    player_id: i32,
    team_id: i32,
) -> Result<entity::match_player::Model, DbErr> {
    MatchPlayerFactory::new(db, match_id, player_id, team_id)
        .build()
        .await
}
