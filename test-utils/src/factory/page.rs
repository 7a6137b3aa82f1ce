//! Static page factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PageFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    slug: String,
    body: String,
    published: bool,
}

impl<'a> PageFactory<'a> {
    /// Defaults to a draft titled `"Page {id}"` with slug `"page-{id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Page {}", id),
            slug: format!("page-{}", id),
            body: "Page body".to_string(),
            published: false,
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

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub async fn build(self) -> Result<entity::page::Model, DbErr> {
        let now = Utc::now();
        entity::page::ActiveModel {
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            body: ActiveValue::Set(self.body),
            published: ActiveValue::Set(self.published),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a draft page with default values.
pub async fn create_page(db: &DatabaseConnection) -> Result<entity::page::Model, DbErr> {
    PageFactory::new(db).build().await
}
