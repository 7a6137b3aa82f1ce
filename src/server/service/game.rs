//! Live game tracking: tip-off, clock control, period transitions, timeouts,
//! substitutions and jump balls.
//!
//! Every operation that touches more than one row runs in a single transaction.
//! Apart from `start`, all of them require the match to be `LIVE`.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{match_event::EventType, matches::MatchStatus},
    server::{
        data::{
            jump_ball::JumpBallRepository, match_period::MatchPeriodRepository,
            match_player::MatchPlayerRepository, matches::MatchRepository,
            substitution::SubstitutionRepository, team::TeamRepository,
            timeout::TimeoutRepository,
        },
        error::AppError,
        model::{
            game::{
                CreateJumpBallParams, CreateSubstitutionParams, CreateTimeoutParams, GameClock,
                GameState, JumpBall, MatchPeriod, Substitution, Timeout, UpdateGameStateParams,
            },
            game_rules::GameRules,
            match_event::CreateMatchEventParams,
            matches::{LiveStateUpdate, Match, MatchPlayer, TeamSide},
        },
        service::{
            game_rules::resolve_rules,
            match_event::{find_match, record_event},
        },
    },
};

fn require_status(game: &Match, status: MatchStatus, action: &str) -> Result<(), AppError> {
    if game.status != status {
        return Err(AppError::BadRequest(format!(
            "Cannot {} match {}: status is {}, expected {}",
            action, game.id, game.status, status
        )));
    }

    Ok(())
}

fn require_side(game: &Match, team_id: i32) -> Result<TeamSide, AppError> {
    game.side_of(team_id).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Team {} does not play in match {}",
            team_id, game.id
        ))
    })
}

fn validate_clock(rules: &GameRules, period: i32, clock_seconds: i32) -> Result<(), AppError> {
    rules.elapsed_minute(period, clock_seconds).map(|_| ())
}

async fn roster_entry<C: ConnectionTrait>(
    txn: &C,
    match_id: i32,
    team_id: i32,
    player_id: i32,
) -> Result<MatchPlayer, AppError> {
    MatchPlayerRepository::new(txn)
        .find(match_id, player_id)
        .await?
        .filter(|entry| entry.team_id == team_id)
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "Player {} is not on team {}'s roster for match {}",
                player_id, team_id, match_id
            ))
        })
}

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts an upcoming match.
    ///
    /// Sets the match live in period 1 with a full, stopped clock, zeroed
    /// scores and fouls, the rules' timeout allotment and an open period row.
    ///
    /// # Returns
    /// - `Ok(Match)` - The match after tip-off
    /// - `Err(AppError::NotFound)` - Match does not exist
    /// - `Err(AppError::BadRequest)` - Match is not `UPCOMING`
    pub async fn start(&self, match_id: i32) -> Result<Match, AppError> {
        let txn = self.db.begin().await?;

        let game = find_match(&txn, match_id).await?;
        require_status(&game, MatchStatus::Upcoming, "start")?;
        let rules = resolve_rules(&txn, &game).await?;

        let game = MatchRepository::new(&txn)
            .update_live_state(
                match_id,
                LiveStateUpdate {
                    status: Some(MatchStatus::Live),
                    current_period: Some(1),
                    clock_seconds: Some(rules.period_length_seconds(1)),
                    clock_running: Some(false),
                    team1_score: Some(0),
                    team2_score: Some(0),
                    team1_fouls: Some(0),
                    team2_fouls: Some(0),
                    team1_timeouts: Some(rules.timeouts_per_team),
                    team2_timeouts: Some(rules.timeouts_per_team),
                    possession_team_id: Some(None),
                },
            )
            .await?;
        MatchPeriodRepository::new(&txn).start(match_id, 1).await?;

        txn.commit().await?;

        tracing::info!("Match {} started under rule set '{}'", match_id, rules.name);

        Ok(game)
    }

    /// Stops the clock, optionally correcting the remaining time.
    pub async fn pause(&self, match_id: i32, clock_seconds: Option<i32>) -> Result<Match, AppError> {
        let game = find_match(self.db, match_id).await?;
        require_status(&game, MatchStatus::Live, "pause")?;

        if let Some(seconds) = clock_seconds {
            let rules = resolve_rules(self.db, &game).await?;
            validate_clock(&rules, game.current_period, seconds)?;
        }

        Ok(MatchRepository::new(self.db)
            .update_live_state(
                match_id,
                LiveStateUpdate {
                    clock_running: Some(false),
                    clock_seconds,
                    ..Default::default()
                },
            )
            .await?)
    }

    /// Starts the clock.
    pub async fn resume(&self, match_id: i32) -> Result<Match, AppError> {
        let game = find_match(self.db, match_id).await?;
        require_status(&game, MatchStatus::Live, "resume")?;

        Ok(MatchRepository::new(self.db)
            .update_live_state(
                match_id,
                LiveStateUpdate {
                    clock_running: Some(true),
                    ..Default::default()
                },
            )
            .await?)
    }

    /// Scoreboard view of a match in any status.
    pub async fn state(&self, match_id: i32) -> Result<GameState, AppError> {
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

        Ok(GameState {
            game,
            team1,
            team2,
            rules,
        })
    }

    /// Manual correction of the clock or possession.
    pub async fn update_state(
        &self,
        match_id: i32,
        params: UpdateGameStateParams,
    ) -> Result<GameState, AppError> {
        let game = find_match(self.db, match_id).await?;
        require_status(&game, MatchStatus::Live, "update")?;

        if let Some(seconds) = params.clock_seconds {
            let rules = resolve_rules(self.db, &game).await?;
            validate_clock(&rules, game.current_period, seconds)?;
        }
        if let Some(Some(team_id)) = params.possession_team_id {
            require_side(&game, team_id)?;
        }

        MatchRepository::new(self.db)
            .update_live_state(
                match_id,
                LiveStateUpdate {
                    clock_seconds: params.clock_seconds,
                    possession_team_id: params.possession_team_id,
                    ..Default::default()
                },
            )
            .await?;

        self.state(match_id).await
    }

    /// Closes the current period and opens the next one.
    ///
    /// Snapshots score and fouls into the closing period row, moves to the next
    /// period with a full stopped clock, clears team fouls and, when the rules
    /// say so, restores timeouts. Ending the halftime period also records a
    /// `BREAK` at the end of the closing period followed by a `PLAY_RESUMED` at
    /// the start of the next.
    ///
    /// # Returns
    /// - `Ok(Match)` - Match positioned at the start of the next period
    /// - `Err(AppError::BadRequest)` - Match is not `LIVE`
    pub async fn end_period(&self, match_id: i32) -> Result<Match, AppError> {
        let txn = self.db.begin().await?;

        let game = find_match(&txn, match_id).await?;
        require_status(&game, MatchStatus::Live, "end a period of")?;
        let rules = resolve_rules(&txn, &game).await?;

        let ending = game.current_period;
        let next = ending + 1;
        rules.check_period(next)?;
        let next_clock = rules.period_length_seconds(next);

        let periods = MatchPeriodRepository::new(&txn);
        periods.close(&game).await?;

        let (team1_timeouts, team2_timeouts) = if rules.reset_timeouts_each_period {
            (Some(rules.timeouts_per_team), Some(rules.timeouts_per_team))
        } else {
            (None, None)
        };

        let mut updated = MatchRepository::new(&txn)
            .update_live_state(
                match_id,
                LiveStateUpdate {
                    current_period: Some(next),
                    clock_seconds: Some(next_clock),
                    clock_running: Some(false),
                    team1_fouls: Some(0),
                    team2_fouls: Some(0),
                    team1_timeouts,
                    team2_timeouts,
                    ..Default::default()
                },
            )
            .await?;
        periods.start(match_id, next).await?;

        if rules.is_halftime_after(ending) {
            record_event(
                &txn,
                &updated,
                &rules,
                CreateMatchEventParams::system(match_id, EventType::Break)
                    .at(ending, 0)
                    .with_description("Halftime"),
            )
            .await?;
            record_event(
                &txn,
                &updated,
                &rules,
                CreateMatchEventParams::system(match_id, EventType::PlayResumed)
                    .at(next, next_clock),
            )
            .await?;
            updated = find_match(&txn, match_id).await?;
        }

        txn.commit().await?;

        tracing::info!(
            "Match {} moved from {} to {}",
            match_id,
            rules.period_label(ending),
            rules.period_label(next)
        );

        Ok(updated)
    }

    /// Closes the current period and completes the match.
    pub async fn end_game(&self, match_id: i32) -> Result<Match, AppError> {
        let txn = self.db.begin().await?;

        let game = find_match(&txn, match_id).await?;
        require_status(&game, MatchStatus::Live, "end")?;

        MatchPeriodRepository::new(&txn).close(&game).await?;
        let updated = MatchRepository::new(&txn)
            .update_live_state(
                match_id,
                LiveStateUpdate {
                    status: Some(MatchStatus::Completed),
                    clock_running: Some(false),
                    ..Default::default()
                },
            )
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Match {} completed {}-{}",
            match_id,
            updated.team1_score,
            updated.team2_score
        );

        Ok(updated)
    }

    /// Charges a timeout to a team and stops the clock.
    ///
    /// # Returns
    /// - `Ok(Timeout)` - The recorded timeout
    /// - `Err(AppError::BadRequest)` - Match not live, team not in match or no timeouts left
    pub async fn create_timeout(&self, params: CreateTimeoutParams) -> Result<Timeout, AppError> {
        let txn = self.db.begin().await?;

        let game = find_match(&txn, params.match_id).await?;
        require_status(&game, MatchStatus::Live, "call a timeout in")?;
        let side = require_side(&game, params.team_id)?;
        let remaining = game.timeouts(side);
        if remaining <= 0 {
            return Err(AppError::BadRequest(format!(
                "Team {} has no timeouts left",
                params.team_id
            )));
        }

        let rules = resolve_rules(&txn, &game).await?;
        let at = GameClock::resolve(&game, &rules, params.period, params.seconds_remaining);
        validate_clock(&rules, at.period, at.seconds_remaining)?;

        let mut update = LiveStateUpdate {
            clock_running: Some(false),
            ..Default::default()
        };
        match side {
            TeamSide::Team1 => update.team1_timeouts = Some(remaining - 1),
            TeamSide::Team2 => update.team2_timeouts = Some(remaining - 1),
        }
        let updated = MatchRepository::new(&txn)
            .update_live_state(game.id, update)
            .await?;

        let timeout = TimeoutRepository::new(&txn).create(&params, at).await?;
        record_event(
            &txn,
            &updated,
            &rules,
            CreateMatchEventParams::system(game.id, EventType::Timeout)
                .at(at.period, at.seconds_remaining)
                .for_team(params.team_id)
                .with_description(format!("{} timeout", params.kind.as_str().to_lowercase())),
        )
        .await?;

        txn.commit().await?;

        Ok(timeout)
    }

    /// Swaps a player on the court for one on the bench.
    ///
    /// # Returns
    /// - `Ok(Substitution)` - The recorded substitution
    /// - `Err(AppError::BadRequest)` - Match not live, players not on the team's
    ///   roster, outgoing player on the bench or incoming player already on court
    pub async fn create_substitution(
        &self,
        params: CreateSubstitutionParams,
    ) -> Result<Substitution, AppError> {
        let txn = self.db.begin().await?;

        let game = find_match(&txn, params.match_id).await?;
        require_status(&game, MatchStatus::Live, "substitute in")?;
        require_side(&game, params.team_id)?;
        if params.player_in_id == params.player_out_id {
            return Err(AppError::BadRequest(
                "A player cannot be substituted for themselves".to_string(),
            ));
        }

        let player_in =
            roster_entry(&txn, game.id, params.team_id, params.player_in_id).await?;
        let player_out =
            roster_entry(&txn, game.id, params.team_id, params.player_out_id).await?;
        if !player_out.on_court {
            return Err(AppError::BadRequest(format!(
                "Player {} is not on the court",
                player_out.player_id
            )));
        }
        if player_in.on_court {
            return Err(AppError::BadRequest(format!(
                "Player {} is already on the court",
                player_in.player_id
            )));
        }

        let rules = resolve_rules(&txn, &game).await?;
        let at = GameClock::resolve(&game, &rules, params.period, params.seconds_remaining);
        validate_clock(&rules, at.period, at.seconds_remaining)?;

        let roster = MatchPlayerRepository::new(&txn);
        roster
            .set_on_court(game.id, player_out.player_id, false)
            .await?;
        roster.set_on_court(game.id, player_in.player_id, true).await?;

        let substitution = SubstitutionRepository::new(&txn)
            .create(&params, at)
            .await?;

        let mut event = CreateMatchEventParams::system(game.id, EventType::Substitution)
            .at(at.period, at.seconds_remaining)
            .for_team(params.team_id)
            .with_description(format!(
                "{} in for {}",
                player_in.full_name(),
                player_out.full_name()
            ));
        event.player_id = Some(player_in.player_id);
        record_event(&txn, &game, &rules, event).await?;

        txn.commit().await?;

        Ok(substitution)
    }

    /// Records a jump ball and gives possession to the winner.
    pub async fn create_jump_ball(
        &self,
        params: CreateJumpBallParams,
    ) -> Result<JumpBall, AppError> {
        let txn = self.db.begin().await?;

        let game = find_match(&txn, params.match_id).await?;
        require_status(&game, MatchStatus::Live, "record a jump ball in")?;
        require_side(&game, params.winner_team_id)?;

        let rules = resolve_rules(&txn, &game).await?;
        let at = GameClock::resolve(&game, &rules, params.period, params.seconds_remaining);
        validate_clock(&rules, at.period, at.seconds_remaining)?;

        let updated = MatchRepository::new(&txn)
            .update_live_state(
                game.id,
                LiveStateUpdate {
                    possession_team_id: Some(Some(params.winner_team_id)),
                    ..Default::default()
                },
            )
            .await?;

        let jump_ball = JumpBallRepository::new(&txn).create(&params, at).await?;
        record_event(
            &txn,
            &updated,
            &rules,
            CreateMatchEventParams::system(game.id, EventType::JumpBall)
                .at(at.period, at.seconds_remaining)
                .for_team(params.winner_team_id),
        )
        .await?;

        txn.commit().await?;

        Ok(jump_ball)
    }

    pub async fn periods(&self, match_id: i32) -> Result<Vec<MatchPeriod>, AppError> {
        find_match(self.db, match_id).await?;

        Ok(MatchPeriodRepository::new(self.db)
            .get_by_match(match_id)
            .await?)
    }

    pub async fn timeouts(&self, match_id: i32) -> Result<Vec<Timeout>, AppError> {
        find_match(self.db, match_id).await?;

        Ok(TimeoutRepository::new(self.db).get_by_match(match_id).await?)
    }

    pub async fn substitutions(&self, match_id: i32) -> Result<Vec<Substitution>, AppError> {
        find_match(self.db, match_id).await?;

        Ok(SubstitutionRepository::new(self.db)
            .get_by_match(match_id)
            .await?)
    }

    pub async fn jump_balls(&self, match_id: i32) -> Result<Vec<JumpBall>, AppError> {
        find_match(self.db, match_id).await?;

        Ok(JumpBallRepository::new(self.db)
            .get_by_match(match_id)
            .await?)
    }
}
