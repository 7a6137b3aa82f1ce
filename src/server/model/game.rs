//! Live game records: periods, timeouts, substitutions, jump balls and the
//! aggregated game state.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::game::{
        CreateJumpBallDto, CreateSubstitutionDto, CreateTimeoutDto, GameStateDto, JumpBallDto,
        MatchPeriodDto, SubstitutionDto, TeamGameStateDto, TimeoutDto, TimeoutKind,
        UpdateGameStateDto,
    },
    server::model::{
        game_rules::GameRules,
        matches::{Match, TeamSide},
        team::Team,
    },
};

/// A moment on the game clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    pub period: i32,
    pub seconds_remaining: i32,
}

impl GameClock {
    /// Uses the explicit values when given and the match's live clock otherwise.
    ///
    /// Before tip-off the match sits at period 0, so missing values fall back to
    /// the opening moment instead: period 1 with the period's full length.
    pub fn resolve(
        game: &Match,
        rules: &GameRules,
        period: Option<i32>,
        seconds_remaining: Option<i32>,
    ) -> Self {
        if game.current_period < 1 {
            let period = period.unwrap_or(1);
            return Self {
                period,
                seconds_remaining: seconds_remaining
                    .unwrap_or_else(|| rules.period_length_seconds(period)),
            };
        }

        Self {
            period: period.unwrap_or(game.current_period),
            seconds_remaining: seconds_remaining.unwrap_or(game.clock_seconds),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchPeriod {
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

impl MatchPeriod {
    pub fn from_entity(entity: entity::match_period::Model) -> Self {
        Self {
            id: entity.id,
            match_id: entity.match_id,
            period: entity.period,
            started_at: entity.started_at,
            ended_at: entity.ended_at,
            team1_score: entity.team1_score,
            team2_score: entity.team2_score,
            team1_fouls: entity.team1_fouls,
            team2_fouls: entity.team2_fouls,
        }
    }

    pub fn into_dto(self) -> MatchPeriodDto {
        MatchPeriodDto {
            id: self.id,
            match_id: self.match_id,
            period: self.period,
            started_at: self.started_at,
            ended_at: self.ended_at,
            team1_score: self.team1_score,
            team2_score: self.team2_score,
            team1_fouls: self.team1_fouls,
            team2_fouls: self.team2_fouls,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeout {
    pub id: i32,
    pub match_id: i32,
    pub team_id: i32,
    pub kind: TimeoutKind,
    pub period: i32,
    pub seconds_remaining: i32,
    pub created_at: DateTime<Utc>,
}

impl Timeout {
    pub fn from_entity(entity: entity::timeout::Model) -> Result<Self, DbErr> {
        let kind = entity.kind.parse::<TimeoutKind>().map_err(DbErr::Custom)?;

        Ok(Self {
            id: entity.id,
            match_id: entity.match_id,
            team_id: entity.team_id,
            kind,
            period: entity.period,
            seconds_remaining: entity.seconds_remaining,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> TimeoutDto {
        TimeoutDto {
            id: self.id,
            match_id: self.match_id,
            team_id: self.team_id,
            kind: self.kind,
            period: self.period,
            seconds_remaining: self.seconds_remaining,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTimeoutParams {
    pub match_id: i32,
    pub team_id: i32,
    pub kind: TimeoutKind,
    pub period: Option<i32>,
    pub seconds_remaining: Option<i32>,
}

impl CreateTimeoutParams {
    pub fn from_dto(match_id: i32, dto: CreateTimeoutDto) -> Self {
        Self {
            match_id,
            team_id: dto.team_id,
            kind: dto.kind,
            period: dto.period,
            seconds_remaining: dto.seconds_remaining,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Substitution {
    pub id: i32,
    pub match_id: i32,
    pub team_id: i32,
    pub player_in_id: i32,
    pub player_out_id: i32,
    pub period: i32,
    pub seconds_remaining: i32,
    pub created_at: DateTime<Utc>,
}

impl Substitution {
    pub fn from_entity(entity: entity::substitution::Model) -> Self {
        Self {
            id: entity.id,
            match_id: entity.match_id,
            team_id: entity.team_id,
            player_in_id: entity.player_in_id,
            player_out_id: entity.player_out_id,
            period: entity.period,
            seconds_remaining: entity.seconds_remaining,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> SubstitutionDto {
        SubstitutionDto {
            id: self.id,
            match_id: self.match_id,
            team_id: self.team_id,
            player_in_id: self.player_in_id,
            player_out_id: self.player_out_id,
            period: self.period,
            seconds_remaining: self.seconds_remaining,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSubstitutionParams {
    pub match_id: i32,
    pub team_id: i32,
    pub player_in_id: i32,
    pub player_out_id: i32,
    pub period: Option<i32>,
    pub seconds_remaining: Option<i32>,
}

impl CreateSubstitutionParams {
    pub fn from_dto(match_id: i32, dto: CreateSubstitutionDto) -> Self {
        Self {
            match_id,
            team_id: dto.team_id,
            player_in_id: dto.player_in_id,
            player_out_id: dto.player_out_id,
            period: dto.period,
            seconds_remaining: dto.seconds_remaining,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JumpBall {
    pub id: i32,
    pub match_id: i32,
    pub team1_player_id: Option<i32>,
    pub team2_player_id: Option<i32>,
    pub winner_team_id: i32,
    pub period: i32,
    pub seconds_remaining: i32,
    pub created_at: DateTime<Utc>,
}

impl JumpBall {
    pub fn from_entity(entity: entity::jump_ball::Model) -> Self {
        Self {
            id: entity.id,
            match_id: entity.match_id,
            team1_player_id: entity.team1_player_id,
            team2_player_id: entity.team2_player_id,
            winner_team_id: entity.winner_team_id,
            period: entity.period,
            seconds_remaining: entity.seconds_remaining,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> JumpBallDto {
        JumpBallDto {
            id: self.id,
            match_id: self.match_id,
            team1_player_id: self.team1_player_id,
            team2_player_id: self.team2_player_id,
            winner_team_id: self.winner_team_id,
            period: self.period,
            seconds_remaining: self.seconds_remaining,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateJumpBallParams {
    pub match_id: i32,
    pub team1_player_id: Option<i32>,
    pub team2_player_id: Option<i32>,
    pub winner_team_id: i32,
    pub period: Option<i32>,
    pub seconds_remaining: Option<i32>,
}

impl CreateJumpBallParams {
    pub fn from_dto(match_id: i32, dto: CreateJumpBallDto) -> Self {
        Self {
            match_id,
            team1_player_id: dto.team1_player_id,
            team2_player_id: dto.team2_player_id,
            winner_team_id: dto.winner_team_id,
            period: dto.period,
            seconds_remaining: dto.seconds_remaining,
        }
    }
}

/// Manual corrections to the live state.
#[derive(Debug, Clone, Default)]
pub struct UpdateGameStateParams {
    pub clock_seconds: Option<i32>,
    pub possession_team_id: Option<Option<i32>>,
}

impl UpdateGameStateParams {
    pub fn from_dto(dto: UpdateGameStateDto) -> Self {
        Self {
            clock_seconds: dto.clock_seconds,
            possession_team_id: dto.possession_team_id,
        }
    }
}

/// Snapshot of a match as the scoreboard sees it.
#[derive(Debug, Clone)]
pub struct GameState {
    pub game: Match,
    pub team1: Team,
    pub team2: Team,
    pub rules: GameRules,
}

impl GameState {
    /// Whether a team shoots bonus free throws: the opponent has reached the
    /// team foul threshold in the current period.
    pub fn in_bonus(&self, side: TeamSide) -> bool {
        self.game.fouls(side.opponent()) >= self.rules.team_fouls_for_bonus
    }

    fn team_dto(&self, side: TeamSide) -> TeamGameStateDto {
        let team = match side {
            TeamSide::Team1 => &self.team1,
            TeamSide::Team2 => &self.team2,
        };

        TeamGameStateDto {
            team_id: team.id,
            name: team.name.clone(),
            score: self.game.score(side),
            fouls: self.game.fouls(side),
            timeouts: self.game.timeouts(side),
            in_bonus: self.in_bonus(side),
        }
    }

    pub fn into_dto(self) -> GameStateDto {
        let team1 = self.team_dto(TeamSide::Team1);
        let team2 = self.team_dto(TeamSide::Team2);
        let period_label = self.rules.period_label(self.game.current_period);

        GameStateDto {
            match_id: self.game.id,
            status: self.game.status,
            current_period: self.game.current_period,
            period_label,
            clock_seconds: self.game.clock_seconds,
            clock_running: self.game.clock_running,
            possession_team_id: self.game.possession_team_id,
            team1,
            team2,
            rules: self.rules.into_dto(),
        }
    }
}
