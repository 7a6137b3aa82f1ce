use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::game::{CreateTimeoutParams, GameClock, Timeout};

pub struct TimeoutRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimeoutRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a timeout at the given clock reading.
    pub async fn create(
        &self,
        params: &CreateTimeoutParams,
        at: GameClock,
    ) -> Result<Timeout, DbErr> {
        let entity = entity::timeout::ActiveModel {
            match_id: ActiveValue::Set(params.match_id),
            team_id: ActiveValue::Set(params.team_id),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            period: ActiveValue::Set(at.period),
            seconds_remaining: ActiveValue::Set(at.seconds_remaining),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Timeout::from_entity(entity)
    }

    pub async fn get_by_match(&self, match_id: i32) -> Result<Vec<Timeout>, DbErr> {
        entity::prelude::Timeout::find()
            .filter(entity::timeout::Column::MatchId.eq(match_id))
            .order_by_asc(entity::timeout::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Timeout::from_entity)
            .collect()
    }
}
