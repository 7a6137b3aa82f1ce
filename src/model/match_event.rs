use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::model::api::deserialize_some;

/// Kind of play recorded in a match's event log.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    TwoPointMade,
    TwoPointMissed,
    ThreePointMade,
    ThreePointMissed,
    FreeThrowMade,
    FreeThrowMissed,
    OffensiveRebound,
    DefensiveRebound,
    Steal,
    Block,
    Turnover,
    PersonalFoul,
    OffensiveFoul,
    TechnicalFoul,
    Substitution,
    Timeout,
    JumpBall,
    PeriodStart,
    PeriodEnd,
    Break,
    PlayResumed,
    GameStart,
    GameEnd,
}

impl EventType {
    pub const ALL: [EventType; 23] = [
        Self::TwoPointMade,
        Self::TwoPointMissed,
        Self::ThreePointMade,
        Self::ThreePointMissed,
        Self::FreeThrowMade,
        Self::FreeThrowMissed,
        Self::OffensiveRebound,
        Self::DefensiveRebound,
        Self::Steal,
        Self::Block,
        Self::Turnover,
        Self::PersonalFoul,
        Self::OffensiveFoul,
        Self::TechnicalFoul,
        Self::Substitution,
        Self::Timeout,
        Self::JumpBall,
        Self::PeriodStart,
        Self::PeriodEnd,
        Self::Break,
        Self::PlayResumed,
        Self::GameStart,
        Self::GameEnd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoPointMade => "TWO_POINT_MADE",
            Self::TwoPointMissed => "TWO_POINT_MISSED",
            Self::ThreePointMade => "THREE_POINT_MADE",
            Self::ThreePointMissed => "THREE_POINT_MISSED",
            Self::FreeThrowMade => "FREE_THROW_MADE",
            Self::FreeThrowMissed => "FREE_THROW_MISSED",
            Self::OffensiveRebound => "OFFENSIVE_REBOUND",
            Self::DefensiveRebound => "DEFENSIVE_REBOUND",
            Self::Steal => "STEAL",
            Self::Block => "BLOCK",
            Self::Turnover => "TURNOVER",
            Self::PersonalFoul => "PERSONAL_FOUL",
            Self::OffensiveFoul => "OFFENSIVE_FOUL",
            Self::TechnicalFoul => "TECHNICAL_FOUL",
            Self::Substitution => "SUBSTITUTION",
            Self::Timeout => "TIMEOUT",
            Self::JumpBall => "JUMP_BALL",
            Self::PeriodStart => "PERIOD_START",
            Self::PeriodEnd => "PERIOD_END",
            Self::Break => "BREAK",
            Self::PlayResumed => "PLAY_RESUMED",
            Self::GameStart => "GAME_START",
            Self::GameEnd => "GAME_END",
        }
    }

    /// Points a made shot is worth; zero for every other event.
    pub fn points(&self) -> i32 {
        match self {
            Self::TwoPointMade => 2,
            Self::ThreePointMade => 3,
            Self::FreeThrowMade => 1,
            _ => 0,
        }
    }

    /// Whether the event contributes to a team's score.
    pub fn is_scoring(&self) -> bool {
        self.points() > 0
    }

    /// Whether the event counts toward team and personal fouls.
    pub fn is_foul(&self) -> bool {
        matches!(
            self,
            Self::PersonalFoul | Self::OffensiveFoul | Self::TechnicalFoul
        )
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|event_type| event_type.as_str() == s)
            .ok_or_else(|| format!("Unknown event type '{}'", s))
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MatchEventDto {
    pub id: i32,
    pub match_id: i32,
    pub event_type: EventType,
    pub period: i32,
    pub seconds_remaining: i32,
    pub minute: i32,
    pub sequence_number: i32,
    pub team_id: Option<i32>,
    pub player_id: Option<i32>,
    pub assist_player_id: Option<i32>,
    pub description: Option<String>,
    pub is_undone: bool,
    pub created_at: DateTime<Utc>,
}

/// `period` and `seconds_remaining` default to the match's live period and clock.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateMatchEventDto {
    pub event_type: EventType,
    pub period: Option<i32>,
    pub seconds_remaining: Option<i32>,
    pub team_id: Option<i32>,
    pub player_id: Option<i32>,
    pub assist_player_id: Option<i32>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateMatchEventDto {
    pub event_type: Option<EventType>,
    pub period: Option<i32>,
    pub seconds_remaining: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub team_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub player_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub assist_player_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    pub is_undone: Option<bool>,
}

/// One line of the public play-by-play feed.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayByPlayEntryDto {
    pub id: i32,
    pub sequence_number: i32,
    pub event_type: EventType,
    pub period: i32,
    pub period_label: String,
    /// Game clock as `MM:SS`.
    pub clock: String,
    pub minute: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
    pub player_id: Option<i32>,
    pub player_name: Option<String>,
    pub assist_player_id: Option<i32>,
    pub assist_player_name: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct StatLineDto {
    pub points: i32,
    pub field_goals_made: i32,
    pub field_goals_attempted: i32,
    pub three_pointers_made: i32,
    pub three_pointers_attempted: i32,
    pub free_throws_made: i32,
    pub free_throws_attempted: i32,
    pub offensive_rebounds: i32,
    pub defensive_rebounds: i32,
    pub rebounds: i32,
    pub assists: i32,
    pub steals: i32,
    pub blocks: i32,
    pub turnovers: i32,
    pub fouls: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerBoxScoreDto {
    pub player_id: i32,
    pub player_name: String,
    pub jersey_number: Option<i32>,
    pub stats: StatLineDto,
    pub fouled_out: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamBoxScoreDto {
    pub team_id: i32,
    pub team_name: String,
    pub score: i32,
    pub players: Vec<PlayerBoxScoreDto>,
    pub totals: StatLineDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BoxScoreDto {
    pub match_id: i32,
    pub team1: TeamBoxScoreDto,
    pub team2: TeamBoxScoreDto,
}
