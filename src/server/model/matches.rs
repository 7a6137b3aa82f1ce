//! Matches and their rosters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::matches::{
    AddMatchPlayerDto, CreateMatchDto, MatchDto, MatchPlayerDto, MatchStatus, UpdateMatchDto,
};

/// Which of the two match slots a team occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSide {
    Team1,
    Team2,
}

impl TeamSide {
    pub fn opponent(self) -> Self {
        match self {
            Self::Team1 => Self::Team2,
            Self::Team2 => Self::Team1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Match {
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
    pub event_sequence: i32,
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// Converts an entity model to a match domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Match)` - Converted domain model
    /// - `Err(DbErr::Custom)` - Stored status is not a known match status
    pub fn from_entity(entity: entity::matches::Model) -> Result<Self, DbErr> {
        let status = entity.status.parse::<MatchStatus>().map_err(DbErr::Custom)?;

        Ok(Self {
            id: entity.id,
            team1_id: entity.team1_id,
            team2_id: entity.team2_id,
            league_id: entity.league_id,
            season_id: entity.season_id,
            game_rules_id: entity.game_rules_id,
            venue: entity.venue,
            scheduled_at: entity.scheduled_at,
            status,
            team1_score: entity.team1_score,
            team2_score: entity.team2_score,
            current_period: entity.current_period,
            clock_seconds: entity.clock_seconds,
            clock_running: entity.clock_running,
            team1_fouls: entity.team1_fouls,
            team2_fouls: entity.team2_fouls,
            team1_timeouts: entity.team1_timeouts,
            team2_timeouts: entity.team2_timeouts,
            possession_team_id: entity.possession_team_id,
            event_sequence: entity.event_sequence,
            created_at: entity.created_at,
        })
    }

    /// Side the team plays on, or `None` when the team is not in this match.
    pub fn side_of(&self, team_id: i32) -> Option<TeamSide> {
        if team_id == self.team1_id {
            Some(TeamSide::Team1)
        } else if team_id == self.team2_id {
            Some(TeamSide::Team2)
        } else {
            None
        }
    }

    pub fn has_team(&self, team_id: i32) -> bool {
        self.side_of(team_id).is_some()
    }

    pub fn team_id(&self, side: TeamSide) -> i32 {
        match side {
            TeamSide::Team1 => self.team1_id,
            TeamSide::Team2 => self.team2_id,
        }
    }

    pub fn score(&self, side: TeamSide) -> i32 {
        match side {
            TeamSide::Team1 => self.team1_score,
            TeamSide::Team2 => self.team2_score,
        }
    }

    pub fn fouls(&self, side: TeamSide) -> i32 {
        match side {
            TeamSide::Team1 => self.team1_fouls,
            TeamSide::Team2 => self.team2_fouls,
        }
    }

    pub fn timeouts(&self, side: TeamSide) -> i32 {
        match side {
            TeamSide::Team1 => self.team1_timeouts,
            TeamSide::Team2 => self.team2_timeouts,
        }
    }

    pub fn into_dto(self) -> MatchDto {
        MatchDto {
            id: self.id,
            team1_id: self.team1_id,
            team2_id: self.team2_id,
            league_id: self.league_id,
            season_id: self.season_id,
            game_rules_id: self.game_rules_id,
            venue: self.venue,
            scheduled_at: self.scheduled_at,
            status: self.status,
            team1_score: self.team1_score,
            team2_score: self.team2_score,
            current_period: self.current_period,
            clock_seconds: self.clock_seconds,
            clock_running: self.clock_running,
            team1_fouls: self.team1_fouls,
            team2_fouls: self.team2_fouls,
            team1_timeouts: self.team1_timeouts,
            team2_timeouts: self.team2_timeouts,
            possession_team_id: self.possession_team_id,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMatchParams {
    pub team1_id: i32,
    pub team2_id: i32,
    pub league_id: Option<i32>,
    pub season_id: Option<i32>,
    pub game_rules_id: Option<i32>,
    pub venue: Option<String>,
    pub scheduled_at: DateTime<Utc>,
}

impl CreateMatchParams {
    pub fn from_dto(dto: CreateMatchDto) -> Self {
        Self {
            team1_id: dto.team1_id,
            team2_id: dto.team2_id,
            league_id: dto.league_id,
            season_id: dto.season_id,
            game_rules_id: dto.game_rules_id,
            venue: dto.venue,
            scheduled_at: dto.scheduled_at,
        }
    }
}

/// Schedule and status changes. Scores and live state are never set here.
#[derive(Debug, Clone, Default)]
pub struct UpdateMatchParams {
    pub id: i32,
    pub league_id: Option<Option<i32>>,
    pub season_id: Option<Option<i32>>,
    pub game_rules_id: Option<Option<i32>>,
    pub venue: Option<Option<String>>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub status: Option<MatchStatus>,
}

impl UpdateMatchParams {
    pub fn from_dto(id: i32, dto: UpdateMatchDto) -> Self {
        Self {
            id,
            league_id: dto.league_id,
            season_id: dto.season_id,
            game_rules_id: dto.game_rules_id,
            venue: dto.venue,
            scheduled_at: dto.scheduled_at,
            status: dto.status,
        }
    }
}

/// Optional filters for listing matches.
#[derive(Debug, Clone, Default)]
pub struct MatchFilter {
    pub status: Option<MatchStatus>,
    pub league_id: Option<i32>,
    pub season_id: Option<i32>,
    /// Matches where the team plays on either side.
    pub team_id: Option<i32>,
}

/// Live game fields written by the game tracking operations.
///
/// Only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct LiveStateUpdate {
    pub status: Option<MatchStatus>,
    pub current_period: Option<i32>,
    pub clock_seconds: Option<i32>,
    pub clock_running: Option<bool>,
    pub team1_score: Option<i32>,
    pub team2_score: Option<i32>,
    pub team1_fouls: Option<i32>,
    pub team2_fouls: Option<i32>,
    pub team1_timeouts: Option<i32>,
    pub team2_timeouts: Option<i32>,
    pub possession_team_id: Option<Option<i32>>,
}

/// A player entered on a match roster, joined with the player's name.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchPlayer {
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

impl MatchPlayer {
    /// Builds a roster entry from the roster row and its player.
    ///
    /// The roster jersey number wins over the player's default number.
    pub fn from_entity(
        entity: entity::match_player::Model,
        player: Option<entity::player::Model>,
    ) -> Self {
        let (first_name, last_name, default_jersey) = match player {
            Some(player) => (player.first_name, player.last_name, player.jersey_number),
            None => (String::new(), String::new(), None),
        };

        Self {
            id: entity.id,
            match_id: entity.match_id,
            player_id: entity.player_id,
            team_id: entity.team_id,
            first_name,
            last_name,
            jersey_number: entity.jersey_number.or(default_jersey),
            is_starter: entity.is_starter,
            on_court: entity.on_court,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn into_dto(self) -> MatchPlayerDto {
        MatchPlayerDto {
            id: self.id,
            match_id: self.match_id,
            player_id: self.player_id,
            team_id: self.team_id,
            first_name: self.first_name,
            last_name: self.last_name,
            jersey_number: self.jersey_number,
            is_starter: self.is_starter,
            on_court: self.on_court,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddMatchPlayerParams {
    pub match_id: i32,
    pub player_id: i32,
    pub team_id: i32,
    pub jersey_number: Option<i32>,
    pub is_starter: bool,
}

impl AddMatchPlayerParams {
    pub fn from_dto(match_id: i32, dto: AddMatchPlayerDto) -> Self {
        Self {
            match_id,
            player_id: dto.player_id,
            team_id: dto.team_id,
            jersey_number: dto.jersey_number,
            is_starter: dto.is_starter,
        }
    }
}
