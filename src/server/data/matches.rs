//! Match data repository.
//!
//! Besides schedule CRUD this repository owns the live-state columns of a match:
//! the per-match event sequence counter, the derived scores and the clock and
//! foul fields the game engine writes. All of them are expected to be called on
//! the transaction that also writes the related events.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::matches::MatchStatus,
    server::model::matches::{
        CreateMatchParams, LiveStateUpdate, Match, MatchFilter, UpdateMatchParams,
    },
};

pub struct MatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an upcoming match with zeroed live state.
    ///
    /// # Arguments
    /// - `params` - Teams, schedule and optional league, season and rules
    /// - `timeouts_per_team` - Initial timeout allotment from the match's rules
    ///
    /// # Returns
    /// - `Ok(Match)` - The created match
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn create(
        &self,
        params: CreateMatchParams,
        timeouts_per_team: i32,
    ) -> Result<Match, DbErr> {
        let entity = entity::matches::ActiveModel {
            team1_id: ActiveValue::Set(params.team1_id),
            team2_id: ActiveValue::Set(params.team2_id),
            league_id: ActiveValue::Set(params.league_id),
            season_id: ActiveValue::Set(params.season_id),
            game_rules_id: ActiveValue::Set(params.game_rules_id),
            venue: ActiveValue::Set(params.venue),
            scheduled_at: ActiveValue::Set(params.scheduled_at),
            status: ActiveValue::Set(MatchStatus::Upcoming.as_str().to_string()),
            team1_score: ActiveValue::Set(0),
            team2_score: ActiveValue::Set(0),
            current_period: ActiveValue::Set(0),
            clock_seconds: ActiveValue::Set(0),
            clock_running: ActiveValue::Set(false),
            team1_fouls: ActiveValue::Set(0),
            team2_fouls: ActiveValue::Set(0),
            team1_timeouts: ActiveValue::Set(timeouts_per_team),
            team2_timeouts: ActiveValue::Set(timeouts_per_team),
            possession_team_id: ActiveValue::Set(None),
            event_sequence: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Match::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Match>, DbErr> {
        entity::prelude::Match::find_by_id(id)
            .one(self.db)
            .await?
            .map(Match::from_entity)
            .transpose()
    }

    /// Gets matches ordered by scheduled time, earliest first.
    pub async fn get_all(&self, filter: MatchFilter) -> Result<Vec<Match>, DbErr> {
        let mut query = entity::prelude::Match::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::matches::Column::Status.eq(status.as_str()));
        }
        if let Some(league_id) = filter.league_id {
            query = query.filter(entity::matches::Column::LeagueId.eq(league_id));
        }
        if let Some(season_id) = filter.season_id {
            query = query.filter(entity::matches::Column::SeasonId.eq(season_id));
        }
        if let Some(team_id) = filter.team_id {
            query = query.filter(
                Condition::any()
                    .add(entity::matches::Column::Team1Id.eq(team_id))
                    .add(entity::matches::Column::Team2Id.eq(team_id)),
            );
        }

        query
            .order_by_asc(entity::matches::Column::ScheduledAt)
            .order_by_asc(entity::matches::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Match::from_entity)
            .collect()
    }

    /// Updates schedule, status and rules. Scores are never touched here.
    pub async fn update(&self, params: UpdateMatchParams) -> Result<Match, DbErr> {
        let existing = entity::prelude::Match::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Match {} not found",
                params.id
            )))?;

        let mut active_model: entity::matches::ActiveModel = existing.into();

        if let Some(league_id) = params.league_id {
            active_model.league_id = ActiveValue::Set(league_id);
        }
        if let Some(season_id) = params.season_id {
            active_model.season_id = ActiveValue::Set(season_id);
        }
        if let Some(game_rules_id) = params.game_rules_id {
            active_model.game_rules_id = ActiveValue::Set(game_rules_id);
        }
        if let Some(venue) = params.venue {
            active_model.venue = ActiveValue::Set(venue);
        }
        if let Some(scheduled_at) = params.scheduled_at {
            active_model.scheduled_at = ActiveValue::Set(scheduled_at);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }

        Match::from_entity(active_model.update(self.db).await?)
    }

    /// Deletes a match. Events, periods, roster and game records cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Match::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Allocates the next event sequence number for a match.
    ///
    /// Increments the match's counter with a single `UPDATE ... SET
    /// event_sequence = event_sequence + 1` and reads the new value back on the
    /// same connection. Called inside the event's transaction, the increment and
    /// the event insert commit or roll back together, and the unique index on
    /// `(match_id, sequence_number)` rejects any duplicate that slips through.
    ///
    /// # Returns
    /// - `Ok(i32)` - Newly allocated sequence number, starting at 1
    /// - `Err(DbErr::RecordNotFound)` - Match does not exist
    /// - `Err(DbErr)` - Other database error
    pub async fn next_sequence_number(&self, match_id: i32) -> Result<i32, DbErr> {
        let result = entity::prelude::Match::update_many()
            .col_expr(
                entity::matches::Column::EventSequence,
                Expr::cust("event_sequence + 1"),
            )
            .filter(entity::matches::Column::Id.eq(match_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "Match {} not found",
                match_id
            )));
        }

        let sequence: Option<i32> = entity::prelude::Match::find_by_id(match_id)
            .select_only()
            .column(entity::matches::Column::EventSequence)
            .into_tuple()
            .one(self.db)
            .await?;

        sequence.ok_or(DbErr::RecordNotFound(format!(
            "Match {} not found",
            match_id
        )))
    }

    /// Writes both team scores.
    pub async fn update_scores(
        &self,
        match_id: i32,
        team1_score: i32,
        team2_score: i32,
    ) -> Result<(), DbErr> {
        entity::matches::ActiveModel {
            id: ActiveValue::Unchanged(match_id),
            team1_score: ActiveValue::Set(team1_score),
            team2_score: ActiveValue::Set(team2_score),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Writes both team foul counts.
    pub async fn update_fouls(
        &self,
        match_id: i32,
        team1_fouls: i32,
        team2_fouls: i32,
    ) -> Result<(), DbErr> {
        entity::matches::ActiveModel {
            id: ActiveValue::Unchanged(match_id),
            team1_fouls: ActiveValue::Set(team1_fouls),
            team2_fouls: ActiveValue::Set(team2_fouls),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Writes the provided live-state fields and returns the updated match.
    ///
    /// # Returns
    /// - `Ok(Match)` - Match after the update
    /// - `Err(DbErr::RecordNotFound)` - Match does not exist
    pub async fn update_live_state(
        &self,
        match_id: i32,
        update: LiveStateUpdate,
    ) -> Result<Match, DbErr> {
        fn set<T: Into<sea_orm::Value>>(value: Option<T>) -> ActiveValue<T> {
            match value {
                Some(value) => ActiveValue::Set(value),
                None => ActiveValue::NotSet,
            }
        }

        let active_model = entity::matches::ActiveModel {
            id: ActiveValue::Unchanged(match_id),
            status: set(update.status.map(|status| status.as_str().to_string())),
            current_period: set(update.current_period),
            clock_seconds: set(update.clock_seconds),
            clock_running: set(update.clock_running),
            team1_score: set(update.team1_score),
            team2_score: set(update.team2_score),
            team1_fouls: set(update.team1_fouls),
            team2_fouls: set(update.team2_fouls),
            team1_timeouts: set(update.team1_timeouts),
            team2_timeouts: set(update.team2_timeouts),
            possession_team_id: set(update.possession_team_id),
            ..Default::default()
        };

        if active_model.is_changed() {
            active_model.update(self.db).await?;
        }

        self.find_by_id(match_id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Match {} not found",
                match_id
            )))
    }
}
