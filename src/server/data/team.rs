use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::team::{CreateTeamParams, Team, UpdateTeamParams};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, DbErr> {
        let entity = entity::team::ActiveModel {
            league_id: ActiveValue::Set(params.league_id),
            name: ActiveValue::Set(params.name),
            short_name: ActiveValue::Set(params.short_name),
            logo_url: ActiveValue::Set(params.logo_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Gets the teams with the given IDs. Missing IDs are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Team>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Team::find()
            .filter(entity::team::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    /// Gets all teams ordered by name, optionally restricted to one league.
    pub async fn get_all(&self, league_id: Option<i32>) -> Result<Vec<Team>, DbErr> {
        let mut query = entity::prelude::Team::find();
        if let Some(league_id) = league_id {
            query = query.filter(entity::team::Column::LeagueId.eq(league_id));
        }

        let entities = query
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    pub async fn update(&self, params: UpdateTeamParams) -> Result<Team, DbErr> {
        let team = entity::prelude::Team::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Team {} not found", params.id)))?;

        let mut active_model: entity::team::ActiveModel = team.into();

        if let Some(league_id) = params.league_id {
            active_model.league_id = ActiveValue::Set(league_id);
        }
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(short_name) = params.short_name {
            active_model.short_name = ActiveValue::Set(short_name);
        }
        if let Some(logo_url) = params.logo_url {
            active_model.logo_url = ActiveValue::Set(logo_url);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Team::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
