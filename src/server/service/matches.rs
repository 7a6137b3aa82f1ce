use sea_orm::DatabaseConnection;

use crate::{
    model::matches::MatchStatus,
    server::{
        data::{
            game_rules::GameRulesRepository, league::LeagueRepository,
            match_player::MatchPlayerRepository, matches::MatchRepository,
            player::PlayerRepository, season::SeasonRepository, team::TeamRepository,
        },
        error::AppError,
        model::{
            game_rules::GameRules,
            matches::{
                AddMatchPlayerParams, CreateMatchParams, Match, MatchFilter, MatchPlayer,
                UpdateMatchParams,
            },
        },
    },
};

pub struct MatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the match or a 404 error.
    pub async fn get_by_id(&self, id: i32) -> Result<Match, AppError> {
        MatchRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Match {} not found", id)))
    }

    pub async fn get_all(&self, filter: MatchFilter) -> Result<Vec<Match>, AppError> {
        Ok(MatchRepository::new(self.db).get_all(filter).await?)
    }

    async fn ensure_references(
        &self,
        league_id: Option<i32>,
        season_id: Option<i32>,
    ) -> Result<(), AppError> {
        if let Some(league_id) = league_id {
            if LeagueRepository::new(self.db)
                .find_by_id(league_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "League {} does not exist",
                    league_id
                )));
            }
        }
        if let Some(season_id) = season_id {
            if SeasonRepository::new(self.db)
                .find_by_id(season_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "Season {} does not exist",
                    season_id
                )));
            }
        }

        Ok(())
    }

    async fn find_rules(&self, game_rules_id: Option<i32>) -> Result<GameRules, AppError> {
        match game_rules_id {
            Some(id) => GameRulesRepository::new(self.db)
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::BadRequest(format!("Game rules {} do not exist", id))),
            None => Ok(GameRules::default()),
        }
    }

    /// Schedules a match between two existing, distinct teams.
    ///
    /// The timeout allotment is taken from the attached rules.
    ///
    /// # Returns
    /// - `Ok(Match)` - The created match with status `UPCOMING`
    /// - `Err(AppError::BadRequest)` - Same team twice or a referenced row is missing
    pub async fn create(&self, params: CreateMatchParams) -> Result<Match, AppError> {
        if params.team1_id == params.team2_id {
            return Err(AppError::BadRequest(
                "A match needs two different teams".to_string(),
            ));
        }

        let teams = TeamRepository::new(self.db)
            .find_by_ids(&[params.team1_id, params.team2_id])
            .await?;
        if teams.len() != 2 {
            return Err(AppError::BadRequest(format!(
                "Teams {} and {} must both exist",
                params.team1_id, params.team2_id
            )));
        }

        self.ensure_references(params.league_id, params.season_id)
            .await?;
        let rules = self.find_rules(params.game_rules_id).await?;

        let game = MatchRepository::new(self.db)
            .create(params, rules.timeouts_per_team)
            .await?;

        tracing::info!(
            "Scheduled match {} ({} vs {})",
            game.id,
            game.team1_id,
            game.team2_id
        );

        Ok(game)
    }

    /// Updates schedule, status and rules of a match.
    ///
    /// A match only goes live through `GameService::start`, which sets up the
    /// period, clock and timeouts. Moving it back to `UPCOMING` or marking it
    /// `COMPLETED` directly is allowed.
    ///
    /// # Returns
    /// - `Ok(Match)` - The updated match
    /// - `Err(AppError::NotFound)` - Match does not exist
    /// - `Err(AppError::BadRequest)` - Status set to `LIVE` on a match that is not
    ///   live, or a referenced row is missing
    pub async fn update(&self, params: UpdateMatchParams) -> Result<Match, AppError> {
        let current = self.get_by_id(params.id).await?;

        if params.status == Some(MatchStatus::Live) && current.status != MatchStatus::Live {
            return Err(AppError::BadRequest(format!(
                "Match {} goes live by starting the game, not by editing its status",
                current.id
            )));
        }

        self.ensure_references(
            params.league_id.flatten(),
            params.season_id.flatten(),
        )
        .await?;
        if let Some(game_rules_id) = params.game_rules_id {
            self.find_rules(game_rules_id).await?;
        }

        Ok(MatchRepository::new(self.db).update(params).await?)
    }

    /// Deletes a match together with its events, periods, roster and game records.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MatchRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Match {} not found", id)));
        }

        tracing::info!("Deleted match {}", id);

        Ok(())
    }

    pub async fn get_roster(&self, match_id: i32) -> Result<Vec<MatchPlayer>, AppError> {
        self.get_by_id(match_id).await?;

        Ok(MatchPlayerRepository::new(self.db)
            .get_by_match(match_id)
            .await?)
    }

    /// Adds a player to the roster of one of the match's teams.
    ///
    /// # Returns
    /// - `Ok(MatchPlayer)` - The roster entry
    /// - `Err(AppError::NotFound)` - Match does not exist
    /// - `Err(AppError::BadRequest)` - Team not in the match, player missing or already rostered
    pub async fn add_player(&self, params: AddMatchPlayerParams) -> Result<MatchPlayer, AppError> {
        let game = self.get_by_id(params.match_id).await?;

        if !game.has_team(params.team_id) {
            return Err(AppError::BadRequest(format!(
                "Team {} does not play in match {}",
                params.team_id, game.id
            )));
        }
        if PlayerRepository::new(self.db)
            .find_by_id(params.player_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Player {} does not exist",
                params.player_id
            )));
        }

        let roster = MatchPlayerRepository::new(self.db);
        if roster.find(game.id, params.player_id).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Player {} is already on the roster of match {}",
                params.player_id, game.id
            )));
        }

        Ok(roster.add(params).await?)
    }

    pub async fn remove_player(&self, match_id: i32, player_id: i32) -> Result<(), AppError> {
        self.get_by_id(match_id).await?;

        if !MatchPlayerRepository::new(self.db)
            .remove(match_id, player_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Player {} is not on the roster of match {}",
                player_id, match_id
            )));
        }

        Ok(())
    }
}
