use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::model::api::deserialize_some;

/// Lifecycle of a match: scheduled, being played, finished.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Upcoming,
    Live,
    Completed,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "UPCOMING",
            Self::Live => "LIVE",
            Self::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UPCOMING" => Ok(Self::Upcoming),
            "LIVE" => Ok(Self::Live),
            "COMPLETED" => Ok(Self::Completed),
            other => Err(format!("Unknown match status '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MatchDto {
    pub id: i32,
    pub team1_id: i32,
    pub team2_id: i32,
    pub league_id: Option<i32>,
    pub season_id: Option<i32>,
    pub game_rules_id: Option<i32>,
    pub venue: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    pub status: MatchStatus,
    pub team1_score: i32,
    pub team2_score: i32,
    pub current_period: i32,
    pub clock_seconds: i32,
    pub clock_running: bool,
    pub team1_fouls: i32,
    pub team2_fouls: i32,
    pub team1_timeouts: i32,
    pub team2_timeouts: i32,
    pub possession_team_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateMatchDto {
    pub team1_id: i32,
    pub team2_id: i32,
    pub league_id: Option<i32>,
    pub season_id: Option<i32>,
    pub game_rules_id: Option<i32>,
    pub venue: Option<String>,
    pub scheduled_at: DateTime<Utc>,
}

/// Scores are not part of the update; they are derived from events.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateMatchDto {
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub league_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub season_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub game_rules_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub venue: Option<Option<String>>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub status: Option<MatchStatus>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MatchPlayerDto {
    pub id: i32,
    pub match_id: i32,
    pub player_id: i32,
    pub team_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub jersey_number: Option<i32>,
    pub is_starter: bool,
    pub on_court: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AddMatchPlayerDto {
    pub player_id: i32,
    pub team_id: i32,
    pub jersey_number: Option<i32>,
    #[serde(default)]
    pub is_starter: bool,
}
