use sea_orm::DatabaseConnection;

use crate::server::{
    data::{league::LeagueRepository, team::TeamRepository},
    error::AppError,
    model::team::{CreateTeamParams, Team, UpdateTeamParams},
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ensure_league(&self, league_id: Option<i32>) -> Result<(), AppError> {
        if let Some(league_id) = league_id {
            if LeagueRepository::new(self.db)
                .find_by_id(league_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "League {} does not exist",
                    league_id
                )));
            }
        }

        Ok(())
    }

    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, AppError> {
        if params.name.trim().is_empty() || params.short_name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Team name and short name are required".to_string(),
            ));
        }
        self.ensure_league(params.league_id).await?;

        Ok(TeamRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))
    }

    pub async fn get_all(&self, league_id: Option<i32>) -> Result<Vec<Team>, AppError> {
        Ok(TeamRepository::new(self.db).get_all(league_id).await?)
    }

    pub async fn update(&self, params: UpdateTeamParams) -> Result<Team, AppError> {
        let repo = TeamRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(AppError::NotFound(format!("Team {} not found", params.id)));
        }
        if let Some(league_id) = params.league_id {
            self.ensure_league(league_id).await?;
        }

        Ok(repo.update(params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TeamRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Team {} not found", id)));
        }

        Ok(())
    }
}
