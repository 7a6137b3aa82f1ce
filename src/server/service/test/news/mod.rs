use crate::{
    model::news::{CreateCommentDto, CreateNewsArticleDto},
    server::{
        error::AppError,
        model::{
            comment::CreateCommentParams,
            news::{CreateNewsArticleParams, UpdateNewsArticleParams},
        },
        service::news::NewsService,
    },
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod article;
mod comment;

fn reply(article_id: i32, parent_id: Option<i32>) -> CreateCommentParams {
    CreateCommentParams::from_dto(
        article_id,
        CreateCommentDto {
            author_name: "Fan".to_string(),
            body: "Great game".to_string(),
            parent_id,
        },
    )
}
