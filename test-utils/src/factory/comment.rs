//! Comment factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating comments on an article.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    article_id: i32,
    parent_id: Option<i32>,
    author_name: String,
    body: String,
    created_at: DateTime<Utc>,
}

impl<'a> CommentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, article_id: i32) -> Self {
        Self {
            db,
            article_id,
            parent_id: None,
            author_name: "Reader".to_string(),
            body: "Nice game".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn parent_id(mut self, parent_id: i32) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            article_id: ActiveValue::Set(self.article_id),
            parent_id: ActiveValue::Set(self.parent_id),
            author_name: ActiveValue::Set(self.author_name),
            body: ActiveValue::Set(self.body),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a top-level comment on the article.
pub async fn create_comment(
    db: &DatabaseConnection,
    article_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, article_id).build().await
}
