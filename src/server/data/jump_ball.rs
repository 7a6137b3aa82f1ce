use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::game::{CreateJumpBallParams, GameClock, JumpBall};

pub struct JumpBallRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JumpBallRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: &CreateJumpBallParams,
        at: GameClock,
    ) -> Result<JumpBall, DbErr> {
        let entity = entity::jump_ball::ActiveModel {
            match_id: ActiveValue::Set(params.match_id),
            team1_player_id: ActiveValue::Set(params.team1_player_id),
            team2_player_id: ActiveValue::Set(params.team2_player_id),
            winner_team_id: ActiveValue::Set(params.winner_team_id),
            period: ActiveValue::Set(at.period),
            seconds_remaining: ActiveValue::Set(at.seconds_remaining),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(JumpBall::from_entity(entity))
    }

    pub async fn get_by_match(&self, match_id: i32) -> Result<Vec<JumpBall>, DbErr> {
        let entities = entity::prelude::JumpBall::find()
            .filter(entity::jump_ball::Column::MatchId.eq(match_id))
            .order_by_asc(entity::jump_ball::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(JumpBall::from_entity).collect())
    }
}
