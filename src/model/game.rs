use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::model::{api::deserialize_some, game_rules::GameRulesDto, matches::MatchStatus};

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeoutKind {
    #[default]
    Full,
    Short,
}

impl TimeoutKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "FULL",
            Self::Short => "SHORT",
        }
    }
}

impl fmt::Display for TimeoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FULL" => Ok(Self::Full),
            "SHORT" => Ok(Self::Short),
            other => Err(format!("Unknown timeout kind '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamGameStateDto {
    pub team_id: i32,
    pub name: String,
    pub score: i32,
    pub fouls: i32,
    pub timeouts: i32,
    /// The opponent has committed enough team fouls this period.
    pub in_bonus: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GameStateDto {
    pub match_id: i32,
    pub status: MatchStatus,
    pub current_period: i32,
    pub period_label: String,
    pub clock_seconds: i32,
    pub clock_running: bool,
    pub possession_team_id: Option<i32>,
    pub team1: TeamGameStateDto,
    pub team2: TeamGameStateDto,
    pub rules: GameRulesDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct PauseGameDto {
    pub clock_seconds: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateGameStateDto {
    pub clock_seconds: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub possession_team_id: Option<Option<i32>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateTimeoutDto {
    pub team_id: i32,
    #[serde(default)]
    pub kind: TimeoutKind,
    pub period: Option<i32>,
    pub seconds_remaining: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TimeoutDto {
    pub id: i32,
    pub match_id: i32,
    pub team_id: i32,
    pub kind: TimeoutKind,
    pub period: i32,
    pub seconds_remaining: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateSubstitutionDto {
    pub team_id: i32,
    pub player_in_id: i32,
    pub player_out_id: i32,
    pub period: Option<i32>,
    pub seconds_remaining: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SubstitutionDto {
    pub id: i32,
    pub match_id: i32,
    pub team_id: i32,
    pub player_in_id: i32,
    pub player_out_id: i32,
    pub period: i32,
    pub seconds_remaining: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateJumpBallDto {
    pub team1_player_id: Option<i32>,
    pub team2_player_id: Option<i32>,
    pub winner_team_id: i32,
    pub period: Option<i32>,
    pub seconds_remaining: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct JumpBallDto {
    pub id: i32,
    pub match_id: i32,
    pub team1_player_id: Option<i32>,
    pub team2_player_id: Option<i32>,
    pub winner_team_id: i32,
    pub period: i32,
    pub seconds_remaining: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MatchPeriodDto {
    pub id: i32,
    pub match_id: i32,
    pub period: i32,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub team1_score: i32,
    pub team2_score: i32,
    pub team1_fouls: i32,
    pub team2_fouls: i32,
}
