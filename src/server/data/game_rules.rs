use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::game_rules::GameRules;

pub struct GameRulesRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameRulesRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a rule set. The `id` and `created_at` of the input are ignored.
    pub async fn create(&self, rules: GameRules) -> Result<GameRules, DbErr> {
        let entity = entity::game_rules::ActiveModel {
            name: ActiveValue::Set(rules.name),
            periods: ActiveValue::Set(rules.periods),
            minutes_per_period: ActiveValue::Set(rules.minutes_per_period),
            overtime_minutes: ActiveValue::Set(rules.overtime_minutes),
            halftime_after_period: ActiveValue::Set(rules.halftime_after_period),
            team_fouls_for_bonus: ActiveValue::Set(rules.team_fouls_for_bonus),
            personal_foul_limit: ActiveValue::Set(rules.personal_foul_limit),
            timeouts_per_team: ActiveValue::Set(rules.timeouts_per_team),
            reset_timeouts_each_period: ActiveValue::Set(rules.reset_timeouts_each_period),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(GameRules::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<GameRules>, DbErr> {
        let entity = entity::prelude::GameRules::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(GameRules::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<GameRules>, DbErr> {
        let entities = entity::prelude::GameRules::find()
            .order_by_asc(entity::game_rules::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(GameRules::from_entity).collect())
    }

    /// Writes every rule field of a stored rule set.
    ///
    /// # Returns
    /// - `Ok(GameRules)` - The updated rule set
    /// - `Err(DbErr::RecordNotFound)` - Rule set has no ID or does not exist
    pub async fn update(&self, rules: GameRules) -> Result<GameRules, DbErr> {
        let id = rules.id.ok_or(DbErr::RecordNotFound(
            "Cannot update the built-in rule set".to_string(),
        ))?;

        let existing = entity::prelude::GameRules::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Game rules {} not found", id)))?;

        let mut active_model: entity::game_rules::ActiveModel = existing.into();
        active_model.name = ActiveValue::Set(rules.name);
        active_model.periods = ActiveValue::Set(rules.periods);
        active_model.minutes_per_period = ActiveValue::Set(rules.minutes_per_period);
        active_model.overtime_minutes = ActiveValue::Set(rules.overtime_minutes);
        active_model.halftime_after_period = ActiveValue::Set(rules.halftime_after_period);
        active_model.team_fouls_for_bonus = ActiveValue::Set(rules.team_fouls_for_bonus);
        active_model.personal_foul_limit = ActiveValue::Set(rules.personal_foul_limit);
        active_model.timeouts_per_team = ActiveValue::Set(rules.timeouts_per_team);
        active_model.reset_timeouts_each_period =
            ActiveValue::Set(rules.reset_timeouts_each_period);

        let entity = active_model.update(self.db).await?;

        Ok(GameRules::from_entity(entity))
    }

    /// Deletes a rule set. Matches using it fall back to the defaults.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::GameRules::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
