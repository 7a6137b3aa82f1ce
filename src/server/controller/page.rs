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
        page::{CreatePageDto, PageDto, UpdatePageDto},
    },
    server::{
        controller::AppJson,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::page::{CreatePageParams, UpdatePageParams},
        service::page::PageService,
        state::AppState,
    },
};

/// Tag for grouping static page endpoints in OpenAPI documentation
pub static PAGE_TAG: &str = "page";

#[derive(Deserialize)]
pub struct PageQuery {
    pub published: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/pages",
    tag = PAGE_TAG,
    params(("published" = Option<bool>, Query, description = "Filter on the published flag")),
    responses(
        (status = 200, description = "Pages ordered by title", body = Vec<PageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pages(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let pages = PageService::new(&state.db).get_all(query.published).await?;

    Ok((
        StatusCode::OK,
        Json(pages.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/pages/{id}",
    tag = PAGE_TAG,
    params(("id" = i32, Path, description = "Page ID")),
    responses(
        (status = 200, description = "Page", body = PageDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Fetch a published page by slug for the public site.
#[utoipa::path(
    get,
    path = "/api/pages/slug/{slug}",
    tag = PAGE_TAG,
    params(("slug" = String, Path, description = "Page slug")),
    responses(
        (status = 200, description = "Published page", body = PageDto),
        (status = 404, description = "No published page with that slug", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageService::new(&state.db)
        .get_published_by_slug(&slug)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Create a static page.
///
/// # Returns
/// - `201 Created` - Page created
/// - `400 Bad Request` - Missing title, malformed or duplicate slug
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/pages",
    tag = PAGE_TAG,
    request_body = CreatePageDto,
    responses(
        (status = 201, description = "Page created", body = PageDto),
        (status = 400, description = "Invalid page data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreatePageDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let page = PageService::new(&state.db)
        .create(CreatePageParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(page.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/pages/{id}",
    tag = PAGE_TAG,
    params(("id" = i32, Path, description = "Page ID")),
    request_body = UpdatePageDto,
    responses(
        (status = 200, description = "Page updated", body = PageDto),
        (status = 400, description = "Invalid page data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdatePageDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let page = PageService::new(&state.db)
        .update(UpdatePageParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/pages/{id}",
    tag = PAGE_TAG,
    params(("id" = i32, Path, description = "Page ID")),
    responses(
        (status = 204, description = "Page deleted"),
        (status = 401, description = "Not logged in or not an admin", body = ErrorDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    PageService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
