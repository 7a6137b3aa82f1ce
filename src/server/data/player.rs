use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::player::{CreatePlayerParams, Player, UpdatePlayerParams};

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePlayerParams) -> Result<Player, DbErr> {
        let entity = entity::player::ActiveModel {
            team_id: ActiveValue::Set(params.team_id),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            jersey_number: ActiveValue::Set(params.jersey_number),
            position: ActiveValue::Set(params.position),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Player::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Player>, DbErr> {
        let entity = entity::prelude::Player::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Player::from_entity))
    }

    /// Gets the players with the given IDs. Missing IDs are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Player>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Player::find()
            .filter(entity::player::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }

    /// Gets players ordered by last then first name, optionally for one team.
    pub async fn get_all(&self, team_id: Option<i32>) -> Result<Vec<Player>, DbErr> {
        let mut query = entity::prelude::Player::find();
        if let Some(team_id) = team_id {
            query = query.filter(entity::player::Column::TeamId.eq(team_id));
        }

        let entities = query
            .order_by_asc(entity::player::Column::LastName)
            .order_by_asc(entity::player::Column::FirstName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }

    pub async fn update(&self, params: UpdatePlayerParams) -> Result<Player, DbErr> {
        let player = entity::prelude::Player::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Player {} not found",
                params.id
            )))?;

        let mut active_model: entity::player::ActiveModel = player.into();

        if let Some(team_id) = params.team_id {
            active_model.team_id = ActiveValue::Set(team_id);
        }
        if let Some(first_name) = params.first_name {
            active_model.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active_model.last_name = ActiveValue::Set(last_name);
        }
        if let Some(jersey_number) = params.jersey_number {
            active_model.jersey_number = ActiveValue::Set(jersey_number);
        }
        if let Some(position) = params.position {
            active_model.position = ActiveValue::Set(position);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Player::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Player::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
