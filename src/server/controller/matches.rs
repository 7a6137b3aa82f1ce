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
        matches::{
            AddMatchPlayerDto, CreateMatchDto, MatchDto, MatchPlayerDto, MatchStatus,
            UpdateMatchDto,
        },
    },
    server::{
        controller::AppJson,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::matches::{AddMatchPlayerParams, CreateMatchParams, MatchFilter, UpdateMatchParams},
        service::matches::MatchService,
        state::AppState,
    },
};

/// Tag for grouping match and roster endpoints in OpenAPI documentation
pub static MATCH_TAG: &str = "match";

#[derive(Deserialize)]
pub struct MatchQuery {
    pub status: Option<MatchStatus>,
    pub league_id: Option<i32>,
    pub season_id: Option<i32>,
    pub team_id: Option<i32>,
}

/// List matches ordered by schedule.
///
/// `team_id` matches either side of the fixture.
#[utoipa::path(
    get,
    path = "/api/matches",
    tag = MATCH_TAG,
    params(
        ("status" = Option<MatchStatus>, Query, description = "UPCOMING, LIVE or COMPLETED"),
        ("league_id" = Option<i32>, Query, description = "Only matches of this league"),
        ("season_id" = Option<i32>, Query, description = "Only matches of this season"),
        ("team_id" = Option<i32>, Query, description = "Only matches this team plays in")
    ),
    responses(
        (status = 200, description = "Matches", body = Vec<MatchDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_matches(
    State(state): State<AppState>,
    Query(query): Query<MatchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let matches = MatchService::new(&state.db)
        .get_all(MatchFilter {
            status: query.status,
            league_id: query.league_id,
            season_id: query.season_id,
            team_id: query.team_id,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(matches.into_iter().map(|m| m.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Match", body = MatchDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let game = MatchService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Schedule a match between two teams.
///
/// The match starts `UPCOMING` with zeroed scores and the timeout allotment of its
/// rule set.
///
/// # Returns
/// - `201 Created` - Match scheduled
/// - `400 Bad Request` - Same team twice, or an unknown team, league, season or rule set
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/matches",
    tag = MATCH_TAG,
    request_body = CreateMatchDto,
    responses(
        (status = 201, description = "Match scheduled", body = MatchDto),
        (status = 400, description = "Invalid match data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateMatchDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let game = MatchService::new(&state.db)
        .create(CreateMatchParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(game.into_dto())))
}

/// Update schedule fields, status or rule set. Scores are derived from events and
/// cannot be written here.
#[utoipa::path(
    put,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = UpdateMatchDto,
    responses(
        (status = 200, description = "Match updated", body = MatchDto),
        (status = 400, description = "Invalid match data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateMatchDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let game = MatchService::new(&state.db)
        .update(UpdateMatchParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Delete a match with its events, periods, timeouts, substitutions, jump balls and roster.
///
/// # Access Control
/// - `Admin` - Only admins can delete
#[utoipa::path(
    delete,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 204, description = "Match deleted"),
        (status = 401, description = "Not logged in or not an admin", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    MatchService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}/players",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Match roster", body = Vec<MatchPlayerDto>),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_roster(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let roster = MatchService::new(&state.db).get_roster(id).await?;

    Ok((
        StatusCode::OK,
        Json(roster.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Add a player to a match roster. Starters begin on court.
///
/// # Returns
/// - `201 Created` - Player rostered
/// - `400 Bad Request` - Team not in the match, unknown player or player already rostered
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Match does not exist
#[utoipa::path(
    post,
    path = "/api/matches/{id}/players",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = AddMatchPlayerDto,
    responses(
        (status = 201, description = "Player rostered", body = MatchPlayerDto),
        (status = 400, description = "Invalid roster entry", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_roster_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<AddMatchPlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let entry = MatchService::new(&state.db)
        .add_player(AddMatchPlayerParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/matches/{id}/players/{player_id}",
    tag = MATCH_TAG,
    params(
        ("id" = i32, Path, description = "Match ID"),
        ("player_id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 204, description = "Player removed from the roster"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Player not on this match's roster", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_roster_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, player_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    MatchService::new(&state.db)
        .remove_player(id, player_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
