use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::deserialize_some;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NewsArticleDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateNewsArticleDto {
    pub title: String,
    pub slug: String,
    pub body: String,
    #[serde(default)]
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateNewsArticleDto {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub body: Option<String>,
    pub published: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<DateTime<Utc>>)]
    pub published_at: Option<Option<DateTime<Utc>>>,
}

/// A comment with its replies nested beneath it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub article_id: i32,
    pub parent_id: Option<i32>,
    pub author_name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[schema(no_recursion)]
    pub replies: Vec<CommentDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateCommentDto {
    pub author_name: String,
    pub body: String,
    pub parent_id: Option<i32>,
}
