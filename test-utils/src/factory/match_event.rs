//! Match event factory.
//!
//! Inserts event rows directly, bypassing sequence allocation and score recomputation.
//! Use it to seed state for tests of the recompute functions themselves; tests of the
//! event pipeline should go through the service.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating raw match event rows.
pub struct MatchEventFactory<'a> {
    db: &'a DatabaseConnection,
    match_id: i32,
    event_type: String,
    period: i32,
    seconds_remaining: i32,
    minute: i32,
    sequence_number: i32,
    team_id: Option<i32>,
    player_id: Option<i32>,
    assist_player_id: Option<i32>,
    description: Option<String>,
    is_undone: bool,
}

impl<'a> MatchEventFactory<'a> {
    /// Defaults to period 1 at 600 seconds remaining, sequence number 1, not undone.
    pub fn new(db: &'a DatabaseConnection, match_id: i32, event_type: impl Into<String>) -> Self {
        Self {
            db,
            match_id,
            event_type: event_type.into(),
            period: 1,
            seconds_remaining: 600,
            minute: 0,
            sequence_number: 1,
            team_id: None,
            player_id: None,
            assist_player_id: None,
            description: None,
            is_undone: false,
        }
    }

    pub fn period(mut self, period: i32) -> Self {
        self.period = period;
        self
    }

    pub fn seconds_remaining(mut self, seconds: i32) -> Self {
        self.seconds_remaining = seconds;
        self
    }

    pub fn sequence_number(mut self, sequence_number: i32) -> Self {
        self.sequence_number = sequence_number;
        self
    }

    pub fn team_id(mut self, team_id: i32) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn player_id(mut self, player_id: i32) -> Self {
        self.player_id = Some(player_id);
        self
    }

    pub fn assist_player_id(mut self, player_id: i32) -> Self {
        self.assist_player_id = Some(player_id);
        self
    }

    pub fn is_undone(mut self, is_undone: bool) -> Self {
        self.is_undone = is_undone;
        self
    }

    pub async fn build(self) -> Result<entity::match_event::Model, DbErr> {
        entity::match_event::ActiveModel {
            match_id: ActiveValue::Set(self.match_id),
            event_type: ActiveValue::Set(self.event_type),
            period: ActiveValue::Set(self.period),
            seconds_remaining: ActiveValue::Set(self.seconds_remaining),
            minute: ActiveValue::Set(self.minute),
            sequence_number: ActiveValue::Set(self.sequence_number),
            team_id: ActiveValue::Set(self.team_id),
            player_id: ActiveValue::Set(self.player_id),
            assist_player_id: ActiveValue::Set(self.assist_player_id),
            description: ActiveValue::Set(self.description),
            is_undone: ActiveValue::Set(self.is_undone),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event of the given type for a team with default timing.
pub async fn create_match_event(
    db: &DatabaseConnection,
    match_id: i32,
    team_id: i32,
    event_type: &str,
    sequence_number: i32,
) -> Result<entity::match_event::Model, DbErr> {
    MatchEventFactory::new(db, match_id, event_type)
        .team_id(team_id)
        .sequence_number(sequence_number)
        .build()
        .await
}
