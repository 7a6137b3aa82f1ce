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
        season::{CreateSeasonDto, SeasonDto, UpdateSeasonDto},
    },
    server::{
        controller::AppJson,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::season::{CreateSeasonParams, UpdateSeasonParams},
        service::season::SeasonService,
        state::AppState,
    },
};

/// Tag for grouping season endpoints in OpenAPI documentation
pub static SEASON_TAG: &str = "season";

#[derive(Deserialize)]
pub struct SeasonQuery {
    pub league_id: Option<i32>,
}

/// List seasons, newest start date first, optionally for one league.
#[utoipa::path(
    get,
    path = "/api/seasons",
    tag = SEASON_TAG,
    params(("league_id" = Option<i32>, Query, description = "Only seasons of this league")),
    responses(
        (status = 200, description = "Seasons", body = Vec<SeasonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_seasons(
    State(state): State<AppState>,
    Query(query): Query<SeasonQuery>,
) -> Result<impl IntoResponse, AppError> {
    let seasons = SeasonService::new(&state.db).get_all(query.league_id).await?;

    Ok((
        StatusCode::OK,
        Json(seasons.into_iter().map(|s| s.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/seasons/{id}",
    tag = SEASON_TAG,
    params(("id" = i32, Path, description = "Season ID")),
    responses(
        (status = 200, description = "Season", body = SeasonDto),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_season(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let season = SeasonService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(season.into_dto())))
}

/// Create a season in an existing league.
///
/// # Returns
/// - `201 Created` - Season created
/// - `400 Bad Request` - Unknown league, missing name or end date before start date
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/seasons",
    tag = SEASON_TAG,
    request_body = CreateSeasonDto,
    responses(
        (status = 201, description = "Season created", body = SeasonDto),
        (status = 400, description = "Invalid season data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_season(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateSeasonDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let season = SeasonService::new(&state.db)
        .create(CreateSeasonParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(season.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/seasons/{id}",
    tag = SEASON_TAG,
    params(("id" = i32, Path, description = "Season ID")),
    request_body = UpdateSeasonDto,
    responses(
        (status = 200, description = "Season updated", body = SeasonDto),
        (status = 400, description = "Invalid season data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_season(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateSeasonDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let season = SeasonService::new(&state.db)
        .update(UpdateSeasonParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(season.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/seasons/{id}",
    tag = SEASON_TAG,
    params(("id" = i32, Path, description = "Season ID")),
    responses(
        (status = 204, description = "Season deleted"),
        (status = 401, description = "Not logged in or not an admin", body = ErrorDto),
        (status = 404, description = "Season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_season(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    SeasonService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
