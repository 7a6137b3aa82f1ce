use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        league::{CreateLeagueDto, LeagueDto, UpdateLeagueDto},
    },
    server::{
        controller::AppJson,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::league::{CreateLeagueParams, UpdateLeagueParams},
        service::league::LeagueService,
        state::AppState,
    },
};

/// Tag for grouping league endpoints in OpenAPI documentation
pub static LEAGUE_TAG: &str = "league";

/// List all leagues, ordered by name.
#[utoipa::path(
    get,
    path = "/api/leagues",
    tag = LEAGUE_TAG,
    responses(
        (status = 200, description = "All leagues", body = Vec<LeagueDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leagues(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let leagues = LeagueService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(leagues.into_iter().map(|l| l.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/leagues/{id}",
    tag = LEAGUE_TAG,
    params(("id" = i32, Path, description = "League ID")),
    responses(
        (status = 200, description = "League", body = LeagueDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_league(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let league = LeagueService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(league.into_dto())))
}

/// Create a league.
///
/// The slug must consist of lowercase letters, digits and hyphens and must not be taken
/// by another league.
///
/// # Access Control
/// - Any logged-in user
///
/// # Returns
/// - `201 Created` - League created
/// - `400 Bad Request` - Missing name, malformed or duplicate slug
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/leagues",
    tag = LEAGUE_TAG,
    request_body = CreateLeagueDto,
    responses(
        (status = 201, description = "League created", body = LeagueDto),
        (status = 400, description = "Invalid league data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_league(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateLeagueDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let league = LeagueService::new(&state.db)
        .create(CreateLeagueParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(league.into_dto())))
}

/// Update a league. Omitted fields are left unchanged.
#[utoipa::path(
    put,
    path = "/api/leagues/{id}",
    tag = LEAGUE_TAG,
    params(("id" = i32, Path, description = "League ID")),
    request_body = UpdateLeagueDto,
    responses(
        (status = 200, description = "League updated", body = LeagueDto),
        (status = 400, description = "Invalid league data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_league(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateLeagueDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let league = LeagueService::new(&state.db)
        .update(UpdateLeagueParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(league.into_dto())))
}

/// Delete a league along with its seasons.
///
/// # Access Control
/// - `Admin` - Only admins can delete
#[utoipa::path(
    delete,
    path = "/api/leagues/{id}",
    tag = LEAGUE_TAG,
    params(("id" = i32, Path, description = "League ID")),
    responses(
        (status = 204, description = "League deleted"),
        (status = 401, description = "Not logged in or not an admin", body = ErrorDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_league(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    LeagueService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
