use sea_orm::DatabaseConnection;

use crate::{
    model::news::CommentDto,
    server::{
        data::{comment::CommentRepository, news_article::NewsArticleRepository},
        error::AppError,
        model::{
            comment::{build_comment_tree, Comment, CreateCommentParams},
            news::{CreateNewsArticleParams, NewsArticle, UpdateNewsArticleParams},
        },
        service::league::validate_slug,
    },
};

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an article with a unique slug.
    pub async fn create(&self, params: CreateNewsArticleParams) -> Result<NewsArticle, AppError> {
        if params.title.trim().is_empty() {
            return Err(AppError::BadRequest("Title is required".to_string()));
        }
        validate_slug(&params.slug)?;

        let repo = NewsArticleRepository::new(self.db);
        if repo.slug_exists(&params.slug, None).await? {
            return Err(AppError::BadRequest(format!(
                "Article slug '{}' is already in use",
                params.slug
            )));
        }

        Ok(repo.create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<NewsArticle, AppError> {
        NewsArticleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("News article {} not found", id)))
    }

    pub async fn get_all(&self, published: Option<bool>) -> Result<Vec<NewsArticle>, AppError> {
        Ok(NewsArticleRepository::new(self.db).get_all(published).await?)
    }

    /// Updates an article. Publishing without a timestamp stamps it with the current time.
    pub async fn update(
        &self,
        mut params: UpdateNewsArticleParams,
    ) -> Result<NewsArticle, AppError> {
        let repo = NewsArticleRepository::new(self.db);
        let existing = repo
            .find_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("News article {} not found", params.id)))?;

        if let Some(slug) = &params.slug {
            validate_slug(slug)?;
            if repo.slug_exists(slug, Some(params.id)).await? {
                return Err(AppError::BadRequest(format!(
                    "Article slug '{}' is already in use",
                    slug
                )));
            }
        }

        let publishing = params.published == Some(true) && !existing.published;
        let has_timestamp = match &params.published_at {
            Some(published_at) => published_at.is_some(),
            None => existing.published_at.is_some(),
        };
        if publishing && !has_timestamp {
            params.published_at = Some(Some(chrono::Utc::now()));
        }

        Ok(repo.update(params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !NewsArticleRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("News article {} not found", id)));
        }

        Ok(())
    }

    /// Gets an article's comments nested into reply trees.
    pub async fn get_comments(&self, article_id: i32) -> Result<Vec<CommentDto>, AppError> {
        self.get_by_id(article_id).await?;

        let comments = CommentRepository::new(self.db)
            .get_by_article(article_id)
            .await?;

        Ok(build_comment_tree(comments))
    }

    /// Adds a comment or a reply to an article.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(AppError::NotFound)` - Article does not exist
    /// - `Err(AppError::BadRequest)` - Empty body or parent from another article
    pub async fn add_comment(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        self.get_by_id(params.article_id).await?;

        if params.author_name.trim().is_empty() || params.body.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Comment author and body are required".to_string(),
            ));
        }

        let repo = CommentRepository::new(self.db);
        if let Some(parent_id) = params.parent_id {
            let parent = repo.find_by_id(parent_id).await?;
            if parent.is_none_or(|parent| parent.article_id != params.article_id) {
                return Err(AppError::BadRequest(format!(
                    "Comment {} is not a comment on article {}",
                    parent_id, params.article_id
                )));
            }
        }

        Ok(repo.create(params).await?)
    }

    /// Deletes a comment and its replies.
    pub async fn delete_comment(&self, article_id: i32, comment_id: i32) -> Result<(), AppError> {
        let repo = CommentRepository::new(self.db);

        match repo.find_by_id(comment_id).await? {
            Some(comment) if comment.article_id == article_id => {
                repo.delete(comment_id).await?;
                Ok(())
            }
            _ => Err(AppError::NotFound(format!(
                "Comment {} not found on article {}",
                comment_id, article_id
            ))),
        }
    }
}
