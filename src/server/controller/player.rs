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
        player::{CreatePlayerDto, PlayerDto, UpdatePlayerDto},
    },
    server::{
        controller::AppJson,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::player::{CreatePlayerParams, UpdatePlayerParams},
        service::player::PlayerService,
        state::AppState,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

#[derive(Deserialize)]
pub struct PlayerQuery {
    pub team_id: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/players",
    tag = PLAYER_TAG,
    params(("team_id" = Option<i32>, Query, description = "Only players of this team")),
    responses(
        (status = 200, description = "Players", body = Vec<PlayerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<impl IntoResponse, AppError> {
    let players = PlayerService::new(&state.db).get_all(query.team_id).await?;

    Ok((
        StatusCode::OK,
        Json(players.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    responses(
        (status = 200, description = "Player", body = PlayerDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let player = PlayerService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/players",
    tag = PLAYER_TAG,
    request_body = CreatePlayerDto,
    responses(
        (status = 201, description = "Player created", body = PlayerDto),
        (status = 400, description = "Invalid player data or unknown team", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let player = PlayerService::new(&state.db)
        .create(CreatePlayerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(player.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    request_body = UpdatePlayerDto,
    responses(
        (status = 200, description = "Player updated", body = PlayerDto),
        (status = 400, description = "Invalid player data or unknown team", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let player = PlayerService::new(&state.db)
        .update(UpdatePlayerParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    responses(
        (status = 204, description = "Player deleted"),
        (status = 401, description = "Not logged in or not an admin", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    PlayerService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
