//! Match event recording and the score recomputation pipeline.
//!
//! Team scores and the current period's team fouls are never written directly.
//! They are recomputed from the event log inside the same transaction that
//! changes the log, so the stored totals always equal the sum of the events
//! that are not undone.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::match_event::{BoxScoreDto, EventType, PlayByPlayEntryDto},
    server::{
        data::{
            match_event::MatchEventRepository, match_player::MatchPlayerRepository,
            matches::MatchRepository, player::PlayerRepository, team::TeamRepository,
        },
        error::AppError,
        model::{
            box_score::{compute_box_score, BoxScoreInput},
            game::GameClock,
            game_rules::GameRules,
            match_event::{
                affects_fouls, affects_score, CreateMatchEventParams, MatchEvent,
                MatchEventFilter, NewMatchEvent, UpdateMatchEventParams,
            },
            matches::{LiveStateUpdate, Match, TeamSide},
            player::Player,
        },
        service::game_rules::resolve_rules,
    },
};

/// Whether an event type adds points to a team's score.
pub fn is_scoring_event(event_type: EventType) -> bool {
    event_type.is_scoring()
}

pub(crate) async fn find_match<C: ConnectionTrait>(db: &C, match_id: i32) -> Result<Match, AppError> {
    MatchRepository::new(db)
        .find_by_id(match_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Match {} not found", match_id)))
}

/// Recomputes both team scores from the match's counted scoring events.
///
/// Idempotent: running it twice writes the same totals. Callers run it on the
/// transaction that changed the events.
///
/// # Returns
/// - `Ok((i32, i32))` - New team 1 and team 2 scores
/// - `Err(AppError::NotFound)` - Match does not exist
pub async fn update_match_scores_from_events<C: ConnectionTrait>(
    txn: &C,
    match_id: i32,
) -> Result<(i32, i32), AppError> {
    let game = find_match(txn, match_id).await?;
    let events = MatchEventRepository::new(txn)
        .get_counted_scoring_events(match_id)
        .await?;

    let mut totals = (0, 0);
    for event in &events {
        match event.team_id.and_then(|team_id| game.side_of(team_id)) {
            Some(TeamSide::Team1) => totals.0 += event.counted_points(),
            Some(TeamSide::Team2) => totals.1 += event.counted_points(),
            None => tracing::warn!(
                "Scoring event {} of match {} has no team in the match",
                event.id,
                match_id
            ),
        }
    }

    MatchRepository::new(txn)
        .update_scores(match_id, totals.0, totals.1)
        .await?;

    tracing::debug!(
        "Match {} score recomputed: {}-{}",
        match_id,
        totals.0,
        totals.1
    );

    Ok(totals)
}

/// Recomputes the current period's team fouls from the counted foul events.
pub async fn update_team_fouls_from_events<C: ConnectionTrait>(
    txn: &C,
    match_id: i32,
) -> Result<(i32, i32), AppError> {
    let game = find_match(txn, match_id).await?;
    let fouls = MatchEventRepository::new(txn)
        .get_counted_fouls(match_id, game.current_period)
        .await?;

    let mut totals = (0, 0);
    for foul in &fouls {
        match foul.team_id.and_then(|team_id| game.side_of(team_id)) {
            Some(TeamSide::Team1) => totals.0 += 1,
            Some(TeamSide::Team2) => totals.1 += 1,
            None => {}
        }
    }

    MatchRepository::new(txn)
        .update_fouls(match_id, totals.0, totals.1)
        .await?;

    Ok(totals)
}

fn ensure_team_in_match(game: &Match, team_id: Option<i32>) -> Result<(), AppError> {
    match team_id {
        Some(team_id) if !game.has_team(team_id) => Err(AppError::BadRequest(format!(
            "Team {} does not play in match {}",
            team_id, game.id
        ))),
        _ => Ok(()),
    }
}

/// Validates, numbers and inserts an event on an open transaction.
///
/// Fills a missing period or clock from the match's live state, derives the
/// game minute from the rules and allocates the next sequence number. A
/// `PLAY_RESUMED` event first moves the match's period and clock to the event's.
/// Score and foul recomputation is left to the caller.
pub(crate) async fn record_event<C: ConnectionTrait>(
    txn: &C,
    game: &Match,
    rules: &GameRules,
    params: CreateMatchEventParams,
) -> Result<MatchEvent, AppError> {
    ensure_team_in_match(game, params.team_id)?;

    let clock = GameClock::resolve(game, rules, params.period, params.seconds_remaining);
    let minute = rules.elapsed_minute(clock.period, clock.seconds_remaining)?;

    if params.event_type == EventType::PlayResumed {
        MatchRepository::new(txn)
            .update_live_state(
                game.id,
                LiveStateUpdate {
                    current_period: Some(clock.period),
                    clock_seconds: Some(clock.seconds_remaining),
                    ..Default::default()
                },
            )
            .await?;
    }

    let sequence_number = MatchRepository::new(txn)
        .next_sequence_number(game.id)
        .await?;

    let event = MatchEventRepository::new(txn)
        .create(NewMatchEvent {
            match_id: game.id,
            event_type: params.event_type,
            period: clock.period,
            seconds_remaining: clock.seconds_remaining,
            minute,
            sequence_number,
            team_id: params.team_id,
            player_id: params.player_id,
            assist_player_id: params.assist_player_id,
            description: params.description,
        })
        .await?;

    tracing::debug!(
        "Match {} event #{} {} recorded",
        game.id,
        event.sequence_number,
        event.event_type
    );

    Ok(event)
}

pub struct MatchEventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchEventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an event and keeps the derived totals in step.
    ///
    /// The insert, the sequence allocation, any `PLAY_RESUMED` clock change and
    /// the score or foul recomputation all commit in one transaction.
    ///
    /// # Returns
    /// - `Ok(MatchEvent)` - The stored event
    /// - `Err(AppError::NotFound)` - Match does not exist
    /// - `Err(AppError::BadRequest)` - Team not in the match or clock out of range
    pub async fn create(&self, params: CreateMatchEventParams) -> Result<MatchEvent, AppError> {
        let txn = self.db.begin().await?;

        let game = find_match(&txn, params.match_id).await?;
        let rules = resolve_rules(&txn, &game).await?;
        let event = record_event(&txn, &game, &rules, params).await?;

        if is_scoring_event(event.event_type) {
            update_match_scores_from_events(&txn, game.id).await?;
        }
        if event.event_type.is_foul() {
            update_team_fouls_from_events(&txn, game.id).await?;
        }

        txn.commit().await?;

        Ok(event)
    }

    /// Edits an event, undoes it or restores it.
    ///
    /// Scores are recomputed only when the event is or becomes a scoring event
    /// and its undo flag, type or team changed. Fouls follow the same rule for
    /// foul events, also counting a change of period.
    pub async fn update(
        &self,
        match_id: i32,
        event_id: i32,
        params: UpdateMatchEventParams,
    ) -> Result<MatchEvent, AppError> {
        let txn = self.db.begin().await?;

        let game = find_match(&txn, match_id).await?;
        let repo = MatchEventRepository::new(&txn);
        let before = repo.find_by_id(match_id, event_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Event {} not found in match {}", event_id, match_id))
        })?;

        let mut after = params.apply_to(before.clone());
        ensure_team_in_match(&game, after.team_id)?;

        let rules = resolve_rules(&txn, &game).await?;
        after.minute = rules.elapsed_minute(after.period, after.seconds_remaining)?;

        let clock_moved = after.period != before.period
            || after.seconds_remaining != before.seconds_remaining
            || after.event_type != before.event_type;
        if after.event_type == EventType::PlayResumed && clock_moved && !after.is_undone {
            MatchRepository::new(&txn)
                .update_live_state(
                    match_id,
                    LiveStateUpdate {
                        current_period: Some(after.period),
                        clock_seconds: Some(after.seconds_remaining),
                        ..Default::default()
                    },
                )
                .await?;
        }

        let updated = repo.update(after).await?;

        if affects_score(&before, &updated) {
            update_match_scores_from_events(&txn, match_id).await?;
        }
        if affects_fouls(&before, &updated) {
            update_team_fouls_from_events(&txn, match_id).await?;
        }

        txn.commit().await?;

        tracing::info!(
            "Match {} event #{} updated (undone: {})",
            match_id,
            updated.sequence_number,
            updated.is_undone
        );

        Ok(updated)
    }

    /// Deletes an event. Scoring and foul events recompute the totals in the
    /// same transaction; other events leave the match untouched.
    pub async fn delete(&self, match_id: i32, event_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        find_match(&txn, match_id).await?;
        let repo = MatchEventRepository::new(&txn);
        let event = repo.find_by_id(match_id, event_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Event {} not found in match {}", event_id, match_id))
        })?;

        repo.delete(event.id).await?;

        if is_scoring_event(event.event_type) {
            update_match_scores_from_events(&txn, match_id).await?;
        }
        if event.event_type.is_foul() {
            update_team_fouls_from_events(&txn, match_id).await?;
        }

        txn.commit().await?;

        Ok(())
    }

    pub async fn get_by_match(
        &self,
        match_id: i32,
        filter: MatchEventFilter,
    ) -> Result<Vec<MatchEvent>, AppError> {
        find_match(self.db, match_id).await?;

        Ok(MatchEventRepository::new(self.db)
            .get_by_match(match_id, filter)
            .await?)
    }

    /// Play-by-play feed: counted events, newest first, with names resolved.
    pub async fn play_by_play(&self, match_id: i32) -> Result<Vec<PlayByPlayEntryDto>, AppError> {
        let game = find_match(self.db, match_id).await?;
        let rules = resolve_rules(self.db, &game).await?;
        let events = MatchEventRepository::new(self.db)
            .get_play_by_play(match_id)
            .await?;

        let team_names: HashMap<i32, String> = TeamRepository::new(self.db)
            .find_by_ids(&[game.team1_id, game.team2_id])
            .await?
            .into_iter()
            .map(|team| (team.id, team.name))
            .collect();

        let player_names: HashMap<i32, String> = self
            .players_in(&events)
            .await?
            .into_iter()
            .map(|(id, player)| (id, player.full_name()))
            .collect();

        Ok(events
            .into_iter()
            .map(|event| event.into_play_by_play(&rules, &team_names, &player_names))
            .collect())
    }

    /// Box score derived from the counted events and the match roster.
    pub async fn box_score(&self, match_id: i32) -> Result<BoxScoreDto, AppError> {
        let game = find_match(self.db, match_id).await?;
        let rules = resolve_rules(self.db, &game).await?;

        let teams = TeamRepository::new(self.db);
        let team1 = teams
            .find_by_id(game.team1_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", game.team1_id)))?;
        let team2 = teams
            .find_by_id(game.team2_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", game.team2_id)))?;

        let roster = MatchPlayerRepository::new(self.db)
            .get_by_match(match_id)
            .await?;
        let events = MatchEventRepository::new(self.db)
            .get_by_match(
                match_id,
                MatchEventFilter {
                    period: None,
                    include_undone: false,
                },
            )
            .await?;
        let players = self.players_in(&events).await?;

        Ok(compute_box_score(BoxScoreInput {
            game: &game,
            team1: &team1,
            team2: &team2,
            roster: &roster,
            players: &players,
            events: &events,
            rules: &rules,
        }))
    }

    async fn players_in(&self, events: &[MatchEvent]) -> Result<HashMap<i32, Player>, AppError> {
        let mut ids: Vec<i32> = events
            .iter()
            .flat_map(|event| [event.player_id, event.assist_player_id])
            .flatten()
            .collect();
        ids.sort_unstable();
        ids.dedup();

        Ok(PlayerRepository::new(self.db)
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|player| (player.id, player))
            .collect())
    }
}
