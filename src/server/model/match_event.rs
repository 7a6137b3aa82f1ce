//! Match events: the append-only log every score and stat is derived from.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::collections::HashMap;

use crate::{
    model::match_event::{
        CreateMatchEventDto, EventType, MatchEventDto, PlayByPlayEntryDto, UpdateMatchEventDto,
    },
    server::model::game_rules::GameRules,
};

#[derive(Debug, Clone, PartialEq)]
pub struct MatchEvent {
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

impl MatchEvent {
    /// Converts an entity model to an event domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(MatchEvent)` - Converted domain model
    /// - `Err(DbErr::Custom)` - Stored event type is not a known event type
    pub fn from_entity(entity: entity::match_event::Model) -> Result<Self, DbErr> {
        let event_type = entity
            .event_type
            .parse::<EventType>()
            .map_err(DbErr::Custom)?;

        Ok(Self {
            id: entity.id,
            match_id: entity.match_id,
            event_type,
            period: entity.period,
            seconds_remaining: entity.seconds_remaining,
            minute: entity.minute,
            sequence_number: entity.sequence_number,
            team_id: entity.team_id,
            player_id: entity.player_id,
            assist_player_id: entity.assist_player_id,
            description: entity.description,
            is_undone: entity.is_undone,
            created_at: entity.created_at,
        })
    }

    /// Points this event currently contributes to its team. Undone events count for nothing.
    pub fn counted_points(&self) -> i32 {
        if self.is_undone {
            0
        } else {
            self.event_type.points()
        }
    }

    pub fn into_dto(self) -> MatchEventDto {
        MatchEventDto {
            id: self.id,
            match_id: self.match_id,
            event_type: self.event_type,
            period: self.period,
            seconds_remaining: self.seconds_remaining,
            minute: self.minute,
            sequence_number: self.sequence_number,
            team_id: self.team_id,
            player_id: self.player_id,
            assist_player_id: self.assist_player_id,
            description: self.description,
            is_undone: self.is_undone,
            created_at: self.created_at,
        }
    }

    /// Builds a play-by-play line, resolving team and player names from the given maps.
    pub fn into_play_by_play(
        self,
        rules: &GameRules,
        team_names: &HashMap<i32, String>,
        player_names: &HashMap<i32, String>,
    ) -> PlayByPlayEntryDto {
        let name_of = |names: &HashMap<i32, String>, id: Option<i32>| {
            id.and_then(|id| names.get(&id).cloned())
        };

        PlayByPlayEntryDto {
            id: self.id,
            sequence_number: self.sequence_number,
            event_type: self.event_type,
            period: self.period,
            period_label: rules.period_label(self.period),
            clock: format_clock(self.seconds_remaining),
            minute: self.minute,
            team_id: self.team_id,
            team_name: name_of(team_names, self.team_id),
            player_id: self.player_id,
            player_name: name_of(player_names, self.player_id),
            assist_player_id: self.assist_player_id,
            assist_player_name: name_of(player_names, self.assist_player_id),
            description: self.description,
        }
    }
}

/// Formats a clock reading as `MM:SS`.
pub fn format_clock(seconds_remaining: i32) -> String {
    let seconds = seconds_remaining.max(0);
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Event input as received from a client. Period and clock default to the
/// match's live state when omitted.
#[derive(Debug, Clone)]
pub struct CreateMatchEventParams {
    pub match_id: i32,
    pub event_type: EventType,
    pub period: Option<i32>,
    pub seconds_remaining: Option<i32>,
    pub team_id: Option<i32>,
    pub player_id: Option<i32>,
    pub assist_player_id: Option<i32>,
    pub description: Option<String>,
}

impl CreateMatchEventParams {
    pub fn from_dto(match_id: i32, dto: CreateMatchEventDto) -> Self {
        Self {
            match_id,
            event_type: dto.event_type,
            period: dto.period,
            seconds_remaining: dto.seconds_remaining,
            team_id: dto.team_id,
            player_id: dto.player_id,
            assist_player_id: dto.assist_player_id,
            description: dto.description,
        }
    }

    /// Bare event of the given type with no team or player attached.
    pub fn system(match_id: i32, event_type: EventType) -> Self {
        Self {
            match_id,
            event_type,
            period: None,
            seconds_remaining: None,
            team_id: None,
            player_id: None,
            assist_player_id: None,
            description: None,
        }
    }

    pub fn at(mut self, period: i32, seconds_remaining: i32) -> Self {
        self.period = Some(period);
        self.seconds_remaining = Some(seconds_remaining);
        self
    }

    pub fn for_team(mut self, team_id: i32) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A fully resolved event ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewMatchEvent {
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
}

/// Patch for an existing event. Only `Some` fields change.
#[derive(Debug, Clone, Default)]
pub struct UpdateMatchEventParams {
    pub event_type: Option<EventType>,
    pub period: Option<i32>,
    pub seconds_remaining: Option<i32>,
    pub team_id: Option<Option<i32>>,
    pub player_id: Option<Option<i32>>,
    pub assist_player_id: Option<Option<i32>>,
    pub description: Option<Option<String>>,
    pub is_undone: Option<bool>,
}

impl UpdateMatchEventParams {
    pub fn from_dto(dto: UpdateMatchEventDto) -> Self {
        Self {
            event_type: dto.event_type,
            period: dto.period,
            seconds_remaining: dto.seconds_remaining,
            team_id: dto.team_id,
            player_id: dto.player_id,
            assist_player_id: dto.assist_player_id,
            description: dto.description,
            is_undone: dto.is_undone,
        }
    }

    /// Overlays the patch on an event. The minute is left for the caller to re-derive.
    pub fn apply_to(self, mut event: MatchEvent) -> MatchEvent {
        if let Some(event_type) = self.event_type {
            event.event_type = event_type;
        }
        if let Some(period) = self.period {
            event.period = period;
        }
        if let Some(seconds) = self.seconds_remaining {
            event.seconds_remaining = seconds;
        }
        if let Some(team_id) = self.team_id {
            event.team_id = team_id;
        }
        if let Some(player_id) = self.player_id {
            event.player_id = player_id;
        }
        if let Some(assist_player_id) = self.assist_player_id {
            event.assist_player_id = assist_player_id;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(is_undone) = self.is_undone {
            event.is_undone = is_undone;
        }
        event
    }
}

/// Whether an edit from `before` to `after` can change the team scores.
///
/// True when either version is a scoring event and the undo flag, the type or
/// the team changed.
pub fn affects_score(before: &MatchEvent, after: &MatchEvent) -> bool {
    let scoring = before.event_type.is_scoring() || after.event_type.is_scoring();
    let relevant_change = before.is_undone != after.is_undone
        || before.event_type != after.event_type
        || before.team_id != after.team_id;

    scoring && relevant_change
}

/// Whether an edit from `before` to `after` can change the team foul counts.
pub fn affects_fouls(before: &MatchEvent, after: &MatchEvent) -> bool {
    let foul = before.event_type.is_foul() || after.event_type.is_foul();
    let relevant_change = before.is_undone != after.is_undone
        || before.event_type != after.event_type
        || before.team_id != after.team_id
        || before.period != after.period;

    foul && relevant_change
}

/// Optional filters for listing a match's events.
#[derive(Debug, Clone)]
pub struct MatchEventFilter {
    pub period: Option<i32>,
    pub include_undone: bool,
}

impl Default for MatchEventFilter {
    fn default() -> Self {
        Self {
            period: None,
            include_undone: true,
        }
    }
}
