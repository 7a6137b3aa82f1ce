use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{game::MatchPeriod, matches::Match};

pub struct MatchPeriodRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchPeriodRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Opens a period row starting now with zeroed snapshot columns.
    pub async fn start(&self, match_id: i32, period: i32) -> Result<MatchPeriod, DbErr> {
        let entity = entity::match_period::ActiveModel {
            match_id: ActiveValue::Set(match_id),
            period: ActiveValue::Set(period),
            started_at: ActiveValue::Set(Utc::now()),
            ended_at: ActiveValue::Set(None),
            team1_score: ActiveValue::Set(0),
            team2_score: ActiveValue::Set(0),
            team1_fouls: ActiveValue::Set(0),
            team2_fouls: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MatchPeriod::from_entity(entity))
    }

    /// Stores the match's score and fouls on its current period row and closes it.
    ///
    /// A missing period row, such as for a match started before periods were
    /// tracked, is created on the fly so the snapshot is never lost.
    pub async fn close(&self, game: &Match) -> Result<MatchPeriod, DbErr> {
        let existing = entity::prelude::MatchPeriod::find()
            .filter(entity::match_period::Column::MatchId.eq(game.id))
            .filter(entity::match_period::Column::Period.eq(game.current_period))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(entity) => entity,
            None => {
                entity::match_period::ActiveModel {
                    match_id: ActiveValue::Set(game.id),
                    period: ActiveValue::Set(game.current_period),
                    started_at: ActiveValue::Set(Utc::now()),
                    ended_at: ActiveValue::Set(None),
                    team1_score: ActiveValue::Set(0),
                    team2_score: ActiveValue::Set(0),
                    team1_fouls: ActiveValue::Set(0),
                    team2_fouls: ActiveValue::Set(0),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        let mut active_model: entity::match_period::ActiveModel = entity.into();
        active_model.ended_at = ActiveValue::Set(Some(Utc::now()));
        active_model.team1_score = ActiveValue::Set(game.team1_score);
        active_model.team2_score = ActiveValue::Set(game.team2_score);
        active_model.team1_fouls = ActiveValue::Set(game.team1_fouls);
        active_model.team2_fouls = ActiveValue::Set(game.team2_fouls);

        let entity = active_model.update(self.db).await?;

        Ok(MatchPeriod::from_entity(entity))
    }

    /// Gets a match's period rows in period order.
    pub async fn get_by_match(&self, match_id: i32) -> Result<Vec<MatchPeriod>, DbErr> {
        let entities = entity::prelude::MatchPeriod::find()
            .filter(entity::match_period::Column::MatchId.eq(match_id))
            .order_by_asc(entity::match_period::Column::Period)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(MatchPeriod::from_entity).collect())
    }
}
