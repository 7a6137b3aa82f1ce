use sea_orm::DatabaseConnection;

use crate::server::{
    data::{league::LeagueRepository, season::SeasonRepository},
    error::AppError,
    model::season::{CreateSeasonParams, Season, UpdateSeasonParams},
};

pub struct SeasonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeasonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a season in an existing league.
    ///
    /// # Returns
    /// - `Ok(Season)` - The created season
    /// - `Err(AppError::BadRequest)` - League missing or end date before start date
    pub async fn create(&self, params: CreateSeasonParams) -> Result<Season, AppError> {
        if LeagueRepository::new(self.db)
            .find_by_id(params.league_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "League {} does not exist",
                params.league_id
            )));
        }
        if let Some(end_date) = params.end_date {
            if end_date < params.start_date {
                return Err(AppError::BadRequest(
                    "end_date must not be before start_date".to_string(),
                ));
            }
        }

        Ok(SeasonRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Season, AppError> {
        SeasonRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Season {} not found", id)))
    }

    pub async fn get_all(&self, league_id: Option<i32>) -> Result<Vec<Season>, AppError> {
        Ok(SeasonRepository::new(self.db).get_all(league_id).await?)
    }

    pub async fn update(&self, params: UpdateSeasonParams) -> Result<Season, AppError> {
        let repo = SeasonRepository::new(self.db);
        let existing = repo
            .find_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Season {} not found", params.id)))?;

        let start_date = params.start_date.unwrap_or(existing.start_date);
        let end_date = params.end_date.unwrap_or(existing.end_date);
        if end_date.is_some_and(|end| end < start_date) {
            return Err(AppError::BadRequest(
                "end_date must not be before start_date".to_string(),
            ));
        }

        Ok(repo.update(params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !SeasonRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Season {} not found", id)));
        }

        Ok(())
    }
}
