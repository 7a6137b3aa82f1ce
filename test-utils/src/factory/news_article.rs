//! News article factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating news articles.
pub struct NewsArticleFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    slug: String,
    body: String,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    author_id: Option<i32>,
}

impl<'a> NewsArticleFactory<'a> {
    /// Defaults to an unpublished article titled `"Article {id}"` with slug `"article-{id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Article {}", id),
            slug: format!("article-{}", id),
            body: "Body text".to_string(),
            published: false,
            published_at: None,
            author_id: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Marks the article published at the given time.
    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published = true;
        self.published_at = Some(published_at);
        self
    }

    pub fn author_id(mut self, author_id: Option<i32>) -> Self {
        self.author_id = author_id;
        self
    }

    pub async fn build(self) -> Result<entity::news_article::Model, DbErr> {
        let now = Utc::now();
        entity::news_article::ActiveModel {
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            body: ActiveValue::Set(self.body),
            published: ActiveValue::Set(self.published),
            published_at: ActiveValue::Set(self.published_at),
            author_id: ActiveValue::Set(self.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unpublished article with default values.
pub async fn create_news_article(
    db: &DatabaseConnection,
) -> Result<entity::news_article::Model, DbErr> {
    NewsArticleFactory::new(db).build().await
}
