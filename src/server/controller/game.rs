//! Live game tracking: clock, periods, timeouts, substitutions and jump balls.
//!
//! Every mutating endpoint requires a logged-in user and, apart from `start`, a `LIVE`
//! match. Scoring itself goes through the match event endpoints.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        game::{
            CreateJumpBallDto, CreateSubstitutionDto, CreateTimeoutDto, GameStateDto, JumpBallDto,
            MatchPeriodDto, PauseGameDto, SubstitutionDto, TimeoutDto, UpdateGameStateDto,
        },
        matches::MatchDto,
    },
    server::{
        controller::AppJson,
        error::AppError,
        middleware::auth::AuthGuard,
        model::game::{
            CreateJumpBallParams, CreateSubstitutionParams, CreateTimeoutParams,
            UpdateGameStateParams,
        },
        service::game::GameService,
        state::AppState,
    },
};

/// Tag for grouping live game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

async fn require_login(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    AuthGuard::new(&state.db, &state.jwt, headers)
        .require(&[])
        .await?;

    Ok(())
}

#[utoipa::path(
    get,
    path = "/api/games/{id}/state",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Live game state", body = GameStateDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_state(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let game_state = GameService::new(&state.db).state(id).await?;

    Ok((StatusCode::OK, Json(game_state.into_dto())))
}

/// Correct the clock or possession of a live match.
///
/// `possession_team_id: null` clears possession; omitting the field leaves it unchanged.
#[utoipa::path(
    put,
    path = "/api/games/{id}/state",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = UpdateGameStateDto,
    responses(
        (status = 200, description = "Updated game state", body = GameStateDto),
        (status = 400, description = "Match not live, clock out of range or unknown team", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_game_state(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateGameStateDto>,
) -> Result<impl IntoResponse, AppError> {
    require_login(&state, &headers).await?;

    let game_state = GameService::new(&state.db)
        .update_state(id, UpdateGameStateParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(game_state.into_dto())))
}

/// Tip off an upcoming match: period 1 opens with a full, stopped clock.
#[utoipa::path(
    post,
    path = "/api/games/{id}/start",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Match started", body = MatchDto),
        (status = 400, description = "Match is not upcoming", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_login(&state, &headers).await?;

    let game = GameService::new(&state.db).start(id).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Stop the clock, optionally syncing it to the scorer's reading.
///
/// The body is optional.
#[utoipa::path(
    post,
    path = "/api/games/{id}/pause",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body(content = Option<PauseGameDto>),
    responses(
        (status = 200, description = "Clock stopped", body = MatchDto),
        (status = 400, description = "Match not live or clock out of range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pause_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    require_login(&state, &headers).await?;

    let payload = if body.is_empty() {
        PauseGameDto::default()
    } else {
        serde_json::from_slice::<PauseGameDto>(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid pause body: {}", e)))?
    };

    let game = GameService::new(&state.db)
        .pause(id, payload.clock_seconds)
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/games/{id}/resume",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Clock running", body = MatchDto),
        (status = 400, description = "Match not live", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resume_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_login(&state, &headers).await?;

    let game = GameService::new(&state.db).resume(id).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Close the current period and open the next one.
///
/// Team fouls reset. At halftime a `BREAK` and a `PLAY_RESUMED` event are recorded.
#[utoipa::path(
    post,
    path = "/api/games/{id}/end-period",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Next period opened", body = MatchDto),
        (status = 400, description = "Match not live", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn end_period(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_login(&state, &headers).await?;

    let game = GameService::new(&state.db).end_period(id).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/games/{id}/end",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Match completed", body = MatchDto),
        (status = 400, description = "Match not live", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn end_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_login(&state, &headers).await?;

    let game = GameService::new(&state.db).end_game(id).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Call a timeout: uses one of the team's remaining timeouts and stops the clock.
#[utoipa::path(
    post,
    path = "/api/games/{id}/timeout",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = CreateTimeoutDto,
    responses(
        (status = 201, description = "Timeout recorded", body = TimeoutDto),
        (status = 400, description = "Match not live, unknown team or no timeouts left", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_timeout(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<CreateTimeoutDto>,
) -> Result<impl IntoResponse, AppError> {
    require_login(&state, &headers).await?;

    let timeout = GameService::new(&state.db)
        .create_timeout(CreateTimeoutParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(timeout.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/games/{id}/substitution",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = CreateSubstitutionDto,
    responses(
        (status = 201, description = "Substitution recorded", body = SubstitutionDto),
        (status = 400, description = "Match not live or players not eligible", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_substitution(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<CreateSubstitutionDto>,
) -> Result<impl IntoResponse, AppError> {
    require_login(&state, &headers).await?;

    let substitution = GameService::new(&state.db)
        .create_substitution(CreateSubstitutionParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(substitution.into_dto())))
}

/// Record a jump ball; the winning team gains possession.
#[utoipa::path(
    post,
    path = "/api/games/{id}/jump-ball",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = CreateJumpBallDto,
    responses(
        (status = 201, description = "Jump ball recorded", body = JumpBallDto),
        (status = 400, description = "Match not live or winner not in the match", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_jump_ball(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<CreateJumpBallDto>,
) -> Result<impl IntoResponse, AppError> {
    require_login(&state, &headers).await?;

    let jump_ball = GameService::new(&state.db)
        .create_jump_ball(CreateJumpBallParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(jump_ball.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/games/{id}/periods",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Periods played", body = Vec<MatchPeriodDto>),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_periods(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let periods = GameService::new(&state.db).periods(id).await?;

    Ok((
        StatusCode::OK,
        Json(periods.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/games/{id}/timeouts",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Timeouts called", body = Vec<TimeoutDto>),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_timeouts(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let timeouts = GameService::new(&state.db).timeouts(id).await?;

    Ok((
        StatusCode::OK,
        Json(timeouts.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/games/{id}/substitutions",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Substitutions made", body = Vec<SubstitutionDto>),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_substitutions(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let substitutions = GameService::new(&state.db).substitutions(id).await?;

    Ok((
        StatusCode::OK,
        Json(
            substitutions
                .into_iter()
                .map(|s| s.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/games/{id}/jump-balls",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Jump balls", body = Vec<JumpBallDto>),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_jump_balls(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let jump_balls = GameService::new(&state.db).jump_balls(id).await?;

    Ok((
        StatusCode::OK,
        Json(jump_balls.into_iter().map(|j| j.into_dto()).collect::<Vec<_>>()),
    ))
}
