//! Game rules factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating game rule sets.
///
/// Defaults match the built-in rules: 4 periods of 10 minutes, 5 minute overtime,
/// halftime after period 2, bonus at 5 team fouls, foul out at 5, 5 timeouts per team,
/// timeouts not reset each period.
pub struct GameRulesFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    periods: i32,
    minutes_per_period: i32,
    overtime_minutes: i32,
    halftime_after_period: i32,
    team_fouls_for_bonus: i32,
    personal_foul_limit: i32,
    timeouts_per_team: i32,
    reset_timeouts_each_period: bool,
}

impl<'a> GameRulesFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Rules {}", next_id()),
            periods: 4,
            minutes_per_period: 10,
            overtime_minutes: 5,
            halftime_after_period: 2,
            team_fouls_for_bonus: 5,
            personal_foul_limit: 5,
            timeouts_per_team: 5,
            reset_timeouts_each_period: false,
        }
    }

    pub fn periods(mut self, periods: i32) -> Self {
        self.periods = periods;
        self
    }

    pub fn minutes_per_period(mut self, minutes: i32) -> Self {
        self.minutes_per_period = minutes;
        self
    }

    pub fn overtime_minutes(mut self, minutes: i32) -> Self {
        self.overtime_minutes = minutes;
        self
    }

    pub fn halftime_after_period(mut self, period: i32) -> Self {
        self.halftime_after_period = period;
        self
    }

    pub fn team_fouls_for_bonus(mut self, fouls: i32) -> Self {
        self.team_fouls_for_bonus = fouls;
        self
    }

    pub fn personal_foul_limit(mut self, fouls: i32) -> Self {
        self.personal_foul_limit = fouls;
        self
    }

    pub fn timeouts_per_team(mut self, timeouts: i32) -> Self {
        self.timeouts_per_team = timeouts;
        self
    }

    pub fn reset_timeouts_each_period(mut self, reset: bool) -> Self {
        self.reset_timeouts_each_period = reset;
        self
    }

    pub async fn build(self) -> Result<entity::game_rules::Model, DbErr> {
        entity::game_rules::ActiveModel {
            name: ActiveValue::Set(self.name),
            periods: ActiveValue::Set(self.periods),
            minutes_per_period: ActiveValue::Set(self.minutes_per_period),
            overtime_minutes: ActiveValue::Set(self.overtime_minutes),
            halftime_after_period: ActiveValue::Set(self.halftime_after_period),
            team_fouls_for_bonus: ActiveValue::Set(self.team_fouls_for_bonus),
            personal_foul_limit: ActiveValue::Set(self.personal_foul_limit),
            timeouts_per_team: ActiveValue::Set(self.timeouts_per_team),
            reset_timeouts_each_period: ActiveValue::Set(self.reset_timeouts_each_period),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a rule set with the default values.
pub async fn create_game_rules(
    db: &DatabaseConnection,
) -> Result<entity::game_rules::Model, DbErr> {
    GameRulesFactory::new(db).build().await
}
