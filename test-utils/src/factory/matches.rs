//! Match factory for creating test match entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test matches between two existing teams.
///
/// # Example
///
/// ```rust,ignore
/// let game = MatchFactory::new(&db, team1.id, team2.id)
///     .status("LIVE")
///     .current_period(1)
///     .clock_seconds(600)
///     .build()
///     .await?;
/// ```
pub struct MatchFactory<'a> {
    db: &'a DatabaseConnection,
    team1_id: i32,
    team2_id: i32,
    league_id: Option<i32>,
    season_id: Option<i32>,
    game_rules_id: Option<i32>,
    venue: Option<String>,
    scheduled_at: DateTime<Utc>,
    status: String,
    team1_score: i32,
    team2_score: i32,
    current_period: i32,
    clock_seconds: i32,
    team1_fouls: i32,
    team2_fouls: i32,
    timeouts: i32,
}

impl<'a> MatchFactory<'a> {
    /// Creates a new MatchFactory with default values.
    ///
    /// Defaults:
    /// - scheduled_at: 1 day from now
    /// - status: `"UPCOMING"`
    /// - scores, fouls, timeouts, period, clock: `0`
    pub fn new(db: &'a DatabaseConnection, team1_id: i32, team2_id: i32) -> Self {
        Self {
            db,
            team1_id,
            team2_id,
            league_id: None,
            season_id: None,
            game_rules_id: None,
            venue: None,
            scheduled_at: Utc::now() + Duration::days(1),
            status: "UPCOMING".to_string(),
            team1_score: 0,
            team2_score: 0,
            current_period: 0,
            clock_seconds: 0,
            team1_fouls: 0,
            team2_fouls: 0,
            timeouts: 0,
        }
    }

    pub fn league_id(mut self, league_id: Option<i32>) -> Self {
        self.league_id = league_id;
        self
    }

    pub fn season_id(mut self, season_id: Option<i32>) -> Self {
        self.season_id = season_id;
        self
    }

    pub fn game_rules_id(mut self, game_rules_id: Option<i32>) -> Self {
        self.game_rules_id = game_rules_id;
        self
    }

    pub fn venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    pub fn scheduled_at(mut self, scheduled_at: DateTime<Utc>) -> Self {
        self.scheduled_at = scheduled_at;
        self
    }

    /// Sets the status, `UPCOMING`, `LIVE` or `COMPLETED`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn scores(mut self, team1_score: i32, team2_score: i32) -> Self {
        self.team1_score = team1_score;
        self.team2_score = team2_score;
        self
    }

    pub fn current_period(mut self, period: i32) -> Self {
        self.current_period = period;
        self
    }

    pub fn clock_seconds(mut self, seconds: i32) -> Self {
        self.clock_seconds = seconds;
        self
    }

    pub fn fouls(mut self, team1_fouls: i32, team2_fouls: i32) -> Self {
        self.team1_fouls = team1_fouls;
        self.team2_fouls = team2_fouls;
        self
    }

    /// Sets the remaining timeouts for both teams.
    pub fn timeouts(mut self, timeouts: i32) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub async fn build(self) -> Result<entity::matches::Model, DbErr> {
        entity::matches::ActiveModel {
            team1_id: ActiveValue::Set(self.team1_id),
            team2_id: ActiveValue::Set(self.team2_id),
            league_id: ActiveValue::Set(self.league_id),
            season_id: ActiveValue::Set(self.season_id),
            game_rules_id: ActiveValue::Set(self.game_rules_id),
            venue: ActiveValue::Set(self.venue),
            scheduled_at: ActiveValue::Set(self.scheduled_at),
            status: ActiveValue::Set(self.status),
            team1_score: ActiveValue::Set(self.team1_score),
            team2_score: ActiveValue::Set(self.team2_score),
            current_period: ActiveValue::Set(self.current_period),
            clock_seconds: ActiveValue::Set(self.clock_seconds),
            clock_running: ActiveValue::Set(false),
            team1_fouls: ActiveValue::Set(self.team1_fouls),
            team2_fouls: ActiveValue::Set(self.team2_fouls),
            team1_timeouts: ActiveValue::Set(self.timeouts),
            team2_timeouts: ActiveValue::Set(self.timeouts),
            possession_team_id: ActiveValue::Set(None),
            event_sequence: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an upcoming match between the two teams.
pub async fn create_match(
    db: &DatabaseConnection,
    team1_id: i32,
    team2_id: i32,
) -> Result<entity::matches::Model, DbErr> {
    MatchFactory::new(db, team1_id, team2_id).build().await
}
