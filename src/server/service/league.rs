use sea_orm::DatabaseConnection;

use crate::server::{
    data::league::LeagueRepository,
    error::AppError,
    model::league::{CreateLeagueParams, League, UpdateLeagueParams},
};

pub struct LeagueService<'a> {
    db: &'a DatabaseConnection,
}

/// Rejects blank slugs and slugs with characters that don't belong in a URL path.
pub(crate) fn validate_slug(slug: &str) -> Result<(), AppError> {
    let valid = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Invalid slug '{}': use lowercase letters, digits and hyphens",
            slug
        )))
    }
}

impl<'a> LeagueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a league with a unique slug.
    pub async fn create(&self, params: CreateLeagueParams) -> Result<League, AppError> {
        validate_slug(&params.slug)?;
        let repo = LeagueRepository::new(self.db);

        if repo.slug_exists(&params.slug, None).await? {
            return Err(AppError::BadRequest(format!(
                "League slug '{}' is already in use",
                params.slug
            )));
        }

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<League, AppError> {
        LeagueRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("League {} not found", id)))
    }

    pub async fn get_all(&self) -> Result<Vec<League>, AppError> {
        Ok(LeagueRepository::new(self.db).get_all().await?)
    }

    pub async fn update(&self, params: UpdateLeagueParams) -> Result<League, AppError> {
        let repo = LeagueRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(AppError::NotFound(format!("League {} not found", params.id)));
        }
        if let Some(slug) = &params.slug {
            validate_slug(slug)?;
            if repo.slug_exists(slug, Some(params.id)).await? {
                return Err(AppError::BadRequest(format!(
                    "League slug '{}' is already in use",
                    slug
                )));
            }
        }

        Ok(repo.update(params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !LeagueRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("League {} not found", id)));
        }

        Ok(())
    }
}
