use sea_orm::DatabaseConnection;

use crate::server::{
    data::{staff::StaffRepository, team::TeamRepository},
    error::AppError,
    model::staff::{CreateStaffParams, Staff, UpdateStaffParams},
};

pub struct StaffService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ensure_team(&self, team_id: Option<i32>) -> Result<(), AppError> {
        let Some(team_id) = team_id else {
            return Ok(());
        };

        if TeamRepository::new(self.db)
            .find_by_id(team_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Team {} does not exist",
                team_id
            )));
        }

        Ok(())
    }

    pub async fn create(&self, params: CreateStaffParams) -> Result<Staff, AppError> {
        self.ensure_team(params.team_id).await?;

        Ok(StaffRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Staff, AppError> {
        StaffRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Staff member {} not found", id)))
    }

    pub async fn get_all(&self, team_id: Option<i32>) -> Result<Vec<Staff>, AppError> {
        Ok(StaffRepository::new(self.db).get_all(team_id).await?)
    }

    pub async fn update(&self, params: UpdateStaffParams) -> Result<Staff, AppError> {
        let repo = StaffRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Staff member {} not found",
                params.id
            )));
        }
        if let Some(team_id) = params.team_id {
            self.ensure_team(team_id).await?;
        }

        Ok(repo.update(params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !StaffRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Staff member {} not found", id)));
        }

        Ok(())
    }
}
