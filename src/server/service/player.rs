use sea_orm::DatabaseConnection;

use crate::server::{
    data::{player::PlayerRepository, team::TeamRepository},
    error::AppError,
    model::player::{CreatePlayerParams, Player, UpdatePlayerParams},
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ensure_team(&self, team_id: Option<i32>) -> Result<(), AppError> {
        if let Some(team_id) = team_id {
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
        }

        Ok(())
    }

    pub async fn create(&self, params: CreatePlayerParams) -> Result<Player, AppError> {
        if params.first_name.trim().is_empty() || params.last_name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Player first and last name are required".to_string(),
            ));
        }
        self.ensure_team(params.team_id).await?;

        Ok(PlayerRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Player, AppError> {
        PlayerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Player {} not found", id)))
    }

    pub async fn get_all(&self, team_id: Option<i32>) -> Result<Vec<Player>, AppError> {
        Ok(PlayerRepository::new(self.db).get_all(team_id).await?)
    }

    pub async fn update(&self, params: UpdatePlayerParams) -> Result<Player, AppError> {
        let repo = PlayerRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(AppError::NotFound(format!("Player {} not found", params.id)));
        }
        if let Some(team_id) = params.team_id {
            self.ensure_team(team_id).await?;
        }

        Ok(repo.update(params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PlayerRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Player {} not found", id)));
        }

        Ok(())
    }
}
