use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A rule set. `id` and `created_at` are absent for the built-in defaults.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GameRulesDto {
    pub id: Option<i32>,
    pub name: String,
    pub periods: i32,
    pub minutes_per_period: i32,
    pub overtime_minutes: i32,
    pub halftime_after_period: i32,
    pub team_fouls_for_bonus: i32,
    pub personal_foul_limit: i32,
    pub timeouts_per_team: i32,
    pub reset_timeouts_each_period: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// Omitted numeric fields fall back to the built-in defaults.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateGameRulesDto {
    pub name: String,
    pub periods: Option<i32>,
    pub minutes_per_period: Option<i32>,
    pub overtime_minutes: Option<i32>,
    pub halftime_after_period: Option<i32>,
    pub team_fouls_for_bonus: Option<i32>,
    pub personal_foul_limit: Option<i32>,
    pub timeouts_per_team: Option<i32>,
    pub reset_timeouts_each_period: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateGameRulesDto {
    pub name: Option<String>,
    pub periods: Option<i32>,
    pub minutes_per_period: Option<i32>,
    pub overtime_minutes: Option<i32>,
    pub halftime_after_period: Option<i32>,
    pub team_fouls_for_bonus: Option<i32>,
    pub personal_foul_limit: Option<i32>,
    pub timeouts_per_team: Option<i32>,
    pub reset_timeouts_each_period: Option<bool>,
}

/// Attaches a rule set to a match, or detaches with `null`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AttachGameRulesDto {
    pub game_rules_id: Option<i32>,
}
