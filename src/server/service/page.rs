use sea_orm::DatabaseConnection;

use crate::server::{
    data::page::PageRepository,
    error::AppError,
    model::page::{CreatePageParams, Page, UpdatePageParams},
    service::league::validate_slug,
};

pub struct PageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a static page with a unique slug.
    pub async fn create(&self, params: CreatePageParams) -> Result<Page, AppError> {
        if params.title.trim().is_empty() {
            return Err(AppError::BadRequest("Title is required".to_string()));
        }
        validate_slug(&params.slug)?;

        let repo = PageRepository::new(self.db);
        if repo.slug_exists(&params.slug, None).await? {
            return Err(AppError::BadRequest(format!(
                "Page slug '{}' is already in use",
                params.slug
            )));
        }

        let page = repo.create(params).await?;

        tracing::info!("Created page '{}'", page.slug);

        Ok(page)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Page, AppError> {
        PageRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Page {} not found", id)))
    }

    /// Looks up a page for the public site. Drafts are reported as missing.
    pub async fn get_published_by_slug(&self, slug: &str) -> Result<Page, AppError> {
        PageRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .filter(|page| page.published)
            .ok_or_else(|| AppError::NotFound(format!("Page '{}' not found", slug)))
    }

    pub async fn get_all(&self, published: Option<bool>) -> Result<Vec<Page>, AppError> {
        Ok(PageRepository::new(self.db).get_all(published).await?)
    }

    pub async fn update(&self, params: UpdatePageParams) -> Result<Page, AppError> {
        let repo = PageRepository::new(self.db);
        if repo.find_by_id(params.id).await?.is_none() {
            return Err(AppError::NotFound(format!("Page {} not found", params.id)));
        }

        if let Some(title) = &params.title {
            if title.trim().is_empty() {
                return Err(AppError::BadRequest("Title is required".to_string()));
            }
        }
        if let Some(slug) = &params.slug {
            validate_slug(slug)?;
            if repo.slug_exists(slug, Some(params.id)).await? {
                return Err(AppError::BadRequest(format!(
                    "Page slug '{}' is already in use",
                    slug
                )));
            }
        }

        Ok(repo.update(params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PageRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Page {} not found", id)));
        }

        Ok(())
    }
}
