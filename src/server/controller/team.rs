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
        team::{CreateTeamDto, TeamDto, UpdateTeamDto},
    },
    server::{
        controller::AppJson,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::team::{CreateTeamParams, UpdateTeamParams},
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

#[derive(Deserialize)]
pub struct TeamQuery {
    pub league_id: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    params(("league_id" = Option<i32>, Query, description = "Only teams of this league")),
    responses(
        (status = 200, description = "Teams ordered by name", body = Vec<TeamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    Query(query): Query<TeamQuery>,
) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db).get_all(query.league_id).await?;

    Ok((
        StatusCode::OK,
        Json(teams.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team", body = TeamDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Team created", body = TeamDto),
        (status = 400, description = "Invalid team data or unknown league", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let team = TeamService::new(&state.db)
        .create(CreateTeamParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(team.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Team updated", body = TeamDto),
        (status = 400, description = "Invalid team data or unknown league", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let team = TeamService::new(&state.db)
        .update(UpdateTeamParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Delete a team.
///
/// Players and staff of the team are kept with their team cleared. Matches the team
/// played in are deleted with it.
///
/// # Access Control
/// - `Admin` - Only admins can delete
#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 401, description = "Not logged in or not an admin", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    TeamService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
