//! Match event data repository.
//!
//! Events are the source of truth for scores and team fouls; the aggregate
//! queries here feed the recomputation done by the event service.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    model::match_event::EventType,
    server::model::match_event::{MatchEvent, MatchEventFilter, NewMatchEvent},
};

pub struct MatchEventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

fn types_as_strings(types: impl Iterator<Item = EventType>) -> Vec<String> {
    types.map(|event_type| event_type.as_str().to_string()).collect()
}

impl<'a, C: ConnectionTrait> MatchEventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a fully resolved event.
    ///
    /// # Returns
    /// - `Ok(MatchEvent)` - The stored event
    /// - `Err(DbErr)` - Database error, including a duplicate sequence number
    pub async fn create(&self, event: NewMatchEvent) -> Result<MatchEvent, DbErr> {
        let entity = entity::match_event::ActiveModel {
            match_id: ActiveValue::Set(event.match_id),
            event_type: ActiveValue::Set(event.event_type.as_str().to_string()),
            period: ActiveValue::Set(event.period),
            seconds_remaining: ActiveValue::Set(event.seconds_remaining),
            minute: ActiveValue::Set(event.minute),
            sequence_number: ActiveValue::Set(event.sequence_number),
            team_id: ActiveValue::Set(event.team_id),
            player_id: ActiveValue::Set(event.player_id),
            assist_player_id: ActiveValue::Set(event.assist_player_id),
            description: ActiveValue::Set(event.description),
            is_undone: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        MatchEvent::from_entity(entity)
    }

    /// Finds an event by ID within a match.
    ///
    /// # Returns
    /// - `Ok(Some(MatchEvent))` - Event found and belongs to the match
    /// - `Ok(None)` - No such event in that match
    pub async fn find_by_id(
        &self,
        match_id: i32,
        event_id: i32,
    ) -> Result<Option<MatchEvent>, DbErr> {
        entity::prelude::MatchEvent::find_by_id(event_id)
            .filter(entity::match_event::Column::MatchId.eq(match_id))
            .one(self.db)
            .await?
            .map(MatchEvent::from_entity)
            .transpose()
    }

    /// Lists a match's events in sequence order, oldest first.
    pub async fn get_by_match(
        &self,
        match_id: i32,
        filter: MatchEventFilter,
    ) -> Result<Vec<MatchEvent>, DbErr> {
        let mut query = entity::prelude::MatchEvent::find()
            .filter(entity::match_event::Column::MatchId.eq(match_id));

        if let Some(period) = filter.period {
            query = query.filter(entity::match_event::Column::Period.eq(period));
        }
        if !filter.include_undone {
            query = query.filter(entity::match_event::Column::IsUndone.eq(false));
        }

        query
            .order_by_asc(entity::match_event::Column::SequenceNumber)
            .all(self.db)
            .await?
            .into_iter()
            .map(MatchEvent::from_entity)
            .collect()
    }

    /// Lists the events that are not undone, newest sequence number first.
    pub async fn get_play_by_play(&self, match_id: i32) -> Result<Vec<MatchEvent>, DbErr> {
        entity::prelude::MatchEvent::find()
            .filter(entity::match_event::Column::MatchId.eq(match_id))
            .filter(entity::match_event::Column::IsUndone.eq(false))
            .order_by_desc(entity::match_event::Column::SequenceNumber)
            .all(self.db)
            .await?
            .into_iter()
            .map(MatchEvent::from_entity)
            .collect()
    }

    /// Gets the scoring events of a match that are not undone.
    pub async fn get_counted_scoring_events(
        &self,
        match_id: i32,
    ) -> Result<Vec<MatchEvent>, DbErr> {
        let scoring = types_as_strings(EventType::ALL.into_iter().filter(EventType::is_scoring));

        entity::prelude::MatchEvent::find()
            .filter(entity::match_event::Column::MatchId.eq(match_id))
            .filter(entity::match_event::Column::IsUndone.eq(false))
            .filter(entity::match_event::Column::EventType.is_in(scoring))
            .all(self.db)
            .await?
            .into_iter()
            .map(MatchEvent::from_entity)
            .collect()
    }

    /// Gets the foul events of one period that are not undone.
    pub async fn get_counted_fouls(
        &self,
        match_id: i32,
        period: i32,
    ) -> Result<Vec<MatchEvent>, DbErr> {
        let fouls = types_as_strings(EventType::ALL.into_iter().filter(EventType::is_foul));

        entity::prelude::MatchEvent::find()
            .filter(entity::match_event::Column::MatchId.eq(match_id))
            .filter(entity::match_event::Column::Period.eq(period))
            .filter(entity::match_event::Column::IsUndone.eq(false))
            .filter(entity::match_event::Column::EventType.is_in(fouls))
            .all(self.db)
            .await?
            .into_iter()
            .map(MatchEvent::from_entity)
            .collect()
    }

    /// Writes every editable field of an event. Sequence number and creation time stay.
    pub async fn update(&self, event: MatchEvent) -> Result<MatchEvent, DbErr> {
        let entity = entity::match_event::ActiveModel {
            id: ActiveValue::Unchanged(event.id),
            event_type: ActiveValue::Set(event.event_type.as_str().to_string()),
            period: ActiveValue::Set(event.period),
            seconds_remaining: ActiveValue::Set(event.seconds_remaining),
            minute: ActiveValue::Set(event.minute),
            team_id: ActiveValue::Set(event.team_id),
            player_id: ActiveValue::Set(event.player_id),
            assist_player_id: ActiveValue::Set(event.assist_player_id),
            description: ActiveValue::Set(event.description),
            is_undone: ActiveValue::Set(event.is_undone),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        MatchEvent::from_entity(entity)
    }

    pub async fn delete(&self, event_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MatchEvent::delete_by_id(event_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
