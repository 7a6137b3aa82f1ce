use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::game::{CreateSubstitutionParams, GameClock, Substitution};

pub struct SubstitutionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubstitutionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: &CreateSubstitutionParams,
        at: GameClock,
    ) -> Result<Substitution, DbErr> {
        let entity = entity::substitution::ActiveModel {
            match_id: ActiveValue::Set(params.match_id),
            team_id: ActiveValue::Set(params.team_id),
            player_in_id: ActiveValue::Set(params.player_in_id),
            player_out_id: ActiveValue::Set(params.player_out_id),
            period: ActiveValue::Set(at.period),
            seconds_remaining: ActiveValue::Set(at.seconds_remaining),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Substitution::from_entity(entity))
    }

    pub async fn get_by_match(&self, match_id: i32) -> Result<Vec<Substitution>, DbErr> {
        let entities = entity::prelude::Substitution::find()
            .filter(entity::substitution::Column::MatchId.eq(match_id))
            .order_by_asc(entity::substitution::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Substitution::from_entity).collect())
    }
}
