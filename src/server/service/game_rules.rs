use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::{game_rules::GameRulesRepository, matches::MatchRepository},
    error::AppError,
    model::{
        game_rules::{CreateGameRulesParams, GameRules, UpdateGameRulesParams},
        matches::{Match, UpdateMatchParams},
    },
};

/// Rules that govern a match: its attached rule set, or the defaults.
///
/// Runs on whatever handle it is given so game operations can resolve rules
/// inside their transaction.
pub async fn resolve_rules<C: ConnectionTrait>(db: &C, game: &Match) -> Result<GameRules, AppError> {
    let Some(rules_id) = game.game_rules_id else {
        return Ok(GameRules::default());
    };

    let rules = GameRulesRepository::new(db).find_by_id(rules_id).await?;
    if rules.is_none() {
        tracing::warn!(
            "Match {} references missing rule set {}; using defaults",
            game.id,
            rules_id
        );
    }

    Ok(rules.unwrap_or_default())
}

pub struct GameRulesService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRulesService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateGameRulesParams) -> Result<GameRules, AppError> {
        params.rules.validate()?;

        Ok(GameRulesRepository::new(self.db).create(params.rules).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<GameRules, AppError> {
        GameRulesRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game rules {} not found", id)))
    }

    pub async fn get_all(&self) -> Result<Vec<GameRules>, AppError> {
        Ok(GameRulesRepository::new(self.db).get_all().await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateGameRulesParams,
    ) -> Result<GameRules, AppError> {
        let existing = self.get_by_id(id).await?;
        let rules = params.apply_to(existing);
        rules.validate()?;

        Ok(GameRulesRepository::new(self.db).update(rules).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !GameRulesRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Game rules {} not found", id)));
        }

        Ok(())
    }

    /// Rules for a match, falling back to the defaults when none are attached.
    pub async fn rules_for_match(&self, match_id: i32) -> Result<GameRules, AppError> {
        let game = MatchRepository::new(self.db)
            .find_by_id(match_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Match {} not found", match_id)))?;

        resolve_rules(self.db, &game).await
    }

    /// Attaches a rule set to a match, or detaches with `None`.
    ///
    /// # Returns
    /// - `Ok(GameRules)` - Rules now governing the match
    /// - `Err(AppError::NotFound)` - Match or rule set does not exist
    pub async fn attach(
        &self,
        match_id: i32,
        game_rules_id: Option<i32>,
    ) -> Result<GameRules, AppError> {
        let matches = MatchRepository::new(self.db);
        if matches.find_by_id(match_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Match {} not found", match_id)));
        }

        let rules = match game_rules_id {
            Some(id) => self.get_by_id(id).await?,
            None => GameRules::default(),
        };

        matches
            .update(UpdateMatchParams {
                id: match_id,
                game_rules_id: Some(game_rules_id),
                ..Default::default()
            })
            .await?;

        tracing::info!("Match {} now uses rule set '{}'", match_id, rules.name);

        Ok(rules)
    }
}
