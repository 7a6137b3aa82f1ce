use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::staff::{CreateStaffParams, Staff, UpdateStaffParams};

pub struct StaffRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StaffRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateStaffParams) -> Result<Staff, DbErr> {
        let entity = entity::staff::ActiveModel {
            team_id: ActiveValue::Set(params.team_id),
            name: ActiveValue::Set(params.name),
            role: ActiveValue::Set(params.role),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Staff::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Staff>, DbErr> {
        let entity = entity::prelude::Staff::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Staff::from_entity))
    }

    pub async fn get_all(&self, team_id: Option<i32>) -> Result<Vec<Staff>, DbErr> {
        let mut query = entity::prelude::Staff::find();
        if let Some(team_id) = team_id {
            query = query.filter(entity::staff::Column::TeamId.eq(team_id));
        }

        let entities = query
            .order_by_asc(entity::staff::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Staff::from_entity).collect())
    }

    pub async fn update(&self, params: UpdateStaffParams) -> Result<Staff, DbErr> {
        let staff = entity::prelude::Staff::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Staff member {} not found",
                params.id
            )))?;

        let mut active_model: entity::staff::ActiveModel = staff.into();

        if let Some(team_id) = params.team_id {
            active_model.team_id = ActiveValue::Set(team_id);
        }
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(role) = params.role {
            active_model.role = ActiveValue::Set(role);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Staff::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Staff::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
