use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        news::{
            CommentDto, CreateCommentDto, CreateNewsArticleDto, NewsArticleDto,
            UpdateNewsArticleDto,
        },
    },
    server::{
        controller::AppJson,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            comment::CreateCommentParams,
            news::{CreateNewsArticleParams, UpdateNewsArticleParams},
        },
        service::news::NewsService,
        state::AppState,
    },
};

/// Tag for grouping news and comment endpoints in OpenAPI documentation
pub static NEWS_TAG: &str = "news";

#[derive(Deserialize)]
pub struct NewsQuery {
    pub published: Option<bool>,
}

/// List news articles, newest publication first.
///
/// Without `published`, drafts are included.
#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    params(("published" = Option<bool>, Query, description = "Filter on the published flag")),
    responses(
        (status = 200, description = "Articles", body = Vec<NewsArticleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let articles = NewsService::new(&state.db).get_all(query.published).await?;

    Ok((
        StatusCode::OK,
        Json(articles.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Article", body = NewsArticleDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let article = NewsService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// Create a news article authored by the logged-in user.
///
/// A published article without `published_at` is stamped with the current time.
///
/// # Returns
/// - `201 Created` - Article created
/// - `400 Bad Request` - Missing title, malformed or duplicate slug
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/news",
    tag = NEWS_TAG,
    request_body = CreateNewsArticleDto,
    responses(
        (status = 201, description = "Article created", body = NewsArticleDto),
        (status = 400, description = "Invalid article data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateNewsArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let article = NewsService::new(&state.db)
        .create(CreateNewsArticleParams::from_dto(payload, Some(user.id)))
        .await?;

    Ok((StatusCode::CREATED, Json(article.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "Article ID")),
    request_body = UpdateNewsArticleDto,
    responses(
        (status = 200, description = "Article updated", body = NewsArticleDto),
        (status = 400, description = "Invalid article data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateNewsArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let article = NewsService::new(&state.db)
        .update(UpdateNewsArticleParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "Article ID")),
    responses(
        (status = 204, description = "Article and its comments deleted"),
        (status = 401, description = "Not logged in or not an admin", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    NewsService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get an article's comments as a reply tree.
///
/// Top-level comments and each comment's replies are ordered by creation time.
#[utoipa::path(
    get,
    path = "/api/news/{id}/comments",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Comment tree", body = Vec<CommentDto>),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comments = NewsService::new(&state.db).get_comments(id).await?;

    Ok((StatusCode::OK, Json(comments)))
}

/// Post a comment or a reply. Open to anonymous readers.
///
/// # Returns
/// - `201 Created` - Comment stored
/// - `400 Bad Request` - Empty author or body, or parent from another article
/// - `404 Not Found` - Article does not exist
#[utoipa::path(
    post,
    path = "/api/news/{id}/comments",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "Article ID")),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment stored", body = CommentDto),
        (status = 400, description = "Invalid comment", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let comment = NewsService::new(&state.db)
        .add_comment(CreateCommentParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/news/{id}/comments/{comment_id}",
    tag = NEWS_TAG,
    params(
        ("id" = i32, Path, description = "Article ID"),
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Comment and its replies deleted"),
        (status = 401, description = "Not logged in or not an admin", body = ErrorDto),
        (status = 404, description = "Comment not found on this article", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, comment_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    NewsService::new(&state.db)
        .delete_comment(id, comment_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
