use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::season::{CreateSeasonParams, Season, UpdateSeasonParams};

pub struct SeasonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeasonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateSeasonParams) -> Result<Season, DbErr> {
        let entity = entity::season::ActiveModel {
            league_id: ActiveValue::Set(params.league_id),
            name: ActiveValue::Set(params.name),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Season::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Season>, DbErr> {
        let entity = entity::prelude::Season::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Season::from_entity))
    }

    /// Gets seasons, newest start date first, optionally restricted to one league.
    pub async fn get_all(&self, league_id: Option<i32>) -> Result<Vec<Season>, DbErr> {
        let mut query = entity::prelude::Season::find();
        if let Some(league_id) = league_id {
            query = query.filter(entity::season::Column::LeagueId.eq(league_id));
        }

        let entities = query
            .order_by_desc(entity::season::Column::StartDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Season::from_entity).collect())
    }

    pub async fn update(&self, params: UpdateSeasonParams) -> Result<Season, DbErr> {
        let season = entity::prelude::Season::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Season {} not found",
                params.id
            )))?;

        let mut active_model: entity::season::ActiveModel = season.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(start_date) = params.start_date {
            active_model.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = params.end_date {
            active_model.end_date = ActiveValue::Set(end_date);
        }
        if let Some(is_active) = params.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Season::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Season::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
