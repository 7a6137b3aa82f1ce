use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        game_rules::{AttachGameRulesDto, CreateGameRulesDto, GameRulesDto, UpdateGameRulesDto},
    },
    server::{
        controller::AppJson,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::game_rules::{CreateGameRulesParams, UpdateGameRulesParams},
        service::game_rules::GameRulesService,
        state::AppState,
    },
};

/// Tag for grouping game rule endpoints in OpenAPI documentation
pub static GAME_RULES_TAG: &str = "game-rules";

#[utoipa::path(
    get,
    path = "/api/game-rules",
    tag = GAME_RULES_TAG,
    responses(
        (status = 200, description = "All rule sets", body = Vec<GameRulesDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_game_rules(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let rules = GameRulesService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(rules.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/game-rules/{id}",
    tag = GAME_RULES_TAG,
    params(("id" = i32, Path, description = "Rule set ID")),
    responses(
        (status = 200, description = "Rule set", body = GameRulesDto),
        (status = 404, description = "Rule set not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_rules(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let rules = GameRulesService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(rules.into_dto())))
}

/// Create a rule set. Omitted values take the built-in defaults.
///
/// # Access Control
/// - `Admin` - Only admins manage rule sets
///
/// # Returns
/// - `201 Created` - Rule set created
/// - `400 Bad Request` - Empty name, non-positive lengths or halftime outside regulation
/// - `401 Unauthorized` - Not logged in or not an admin
#[utoipa::path(
    post,
    path = "/api/game-rules",
    tag = GAME_RULES_TAG,
    request_body = CreateGameRulesDto,
    responses(
        (status = 201, description = "Rule set created", body = GameRulesDto),
        (status = 400, description = "Invalid rule values", body = ErrorDto),
        (status = 401, description = "Not logged in or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game_rules(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateGameRulesDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let rules = GameRulesService::new(&state.db)
        .create(CreateGameRulesParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(rules.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/game-rules/{id}",
    tag = GAME_RULES_TAG,
    params(("id" = i32, Path, description = "Rule set ID")),
    request_body = UpdateGameRulesDto,
    responses(
        (status = 200, description = "Rule set updated", body = GameRulesDto),
        (status = 400, description = "Invalid rule values", body = ErrorDto),
        (status = 401, description = "Not logged in or not an admin", body = ErrorDto),
        (status = 404, description = "Rule set not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_game_rules(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateGameRulesDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let rules = GameRulesService::new(&state.db)
        .update(id, UpdateGameRulesParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(rules.into_dto())))
}

/// Delete a rule set. Matches using it fall back to the defaults.
#[utoipa::path(
    delete,
    path = "/api/game-rules/{id}",
    tag = GAME_RULES_TAG,
    params(("id" = i32, Path, description = "Rule set ID")),
    responses(
        (status = 204, description = "Rule set deleted"),
        (status = 401, description = "Not logged in or not an admin", body = ErrorDto),
        (status = 404, description = "Rule set not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game_rules(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    GameRulesService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the rules a match is played under, or the defaults when none are attached.
#[utoipa::path(
    get,
    path = "/api/games/{id}/rules",
    tag = GAME_RULES_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Effective rules", body = GameRulesDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match_rules(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let rules = GameRulesService::new(&state.db).rules_for_match(id).await?;

    Ok((StatusCode::OK, Json(rules.into_dto())))
}

/// Attach a rule set to a match, or detach it with `null`.
///
/// # Access Control
/// - Any logged-in user
#[utoipa::path(
    put,
    path = "/api/games/{id}/rules",
    tag = GAME_RULES_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = AttachGameRulesDto,
    responses(
        (status = 200, description = "Effective rules after the change", body = GameRulesDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Match or rule set not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn attach_match_rules(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<AttachGameRulesDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let rules = GameRulesService::new(&state.db)
        .attach(id, payload.game_rules_id)
        .await?;

    Ok((StatusCode::OK, Json(rules.into_dto())))
}
