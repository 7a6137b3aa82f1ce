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
        match_event::{
            BoxScoreDto, CreateMatchEventDto, MatchEventDto, PlayByPlayEntryDto,
            UpdateMatchEventDto,
        },
    },
    server::{
        controller::AppJson,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::match_event::{CreateMatchEventParams, MatchEventFilter, UpdateMatchEventParams},
        service::match_event::MatchEventService,
        state::AppState,
    },
};

/// Tag for grouping match event endpoints in OpenAPI documentation
pub static MATCH_EVENT_TAG: &str = "match-event";

#[derive(Deserialize)]
pub struct MatchEventQuery {
    pub period: Option<i32>,
    pub include_undone: Option<bool>,
}

/// List a match's events in sequence order.
///
/// Undone events are included unless `include_undone=false`.
#[utoipa::path(
    get,
    path = "/api/matches/{id}/events",
    tag = MATCH_EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Match ID"),
        ("period" = Option<i32>, Query, description = "Only events of this period"),
        ("include_undone" = Option<bool>, Query, description = "Defaults to true")
    ),
    responses(
        (status = 200, description = "Match events", body = Vec<MatchEventDto>),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<MatchEventQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mut filter = MatchEventFilter {
        period: query.period,
        ..Default::default()
    };
    if let Some(include_undone) = query.include_undone {
        filter.include_undone = include_undone;
    }

    let events = MatchEventService::new(&state.db)
        .get_by_match(id, filter)
        .await?;

    Ok((
        StatusCode::OK,
        Json(events.into_iter().map(|e| e.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Record an event for a match.
///
/// Period and clock default to the match's live state. Scoring events update the
/// score, fouls update the period's team fouls.
///
/// # Returns
/// - `201 Created` - Event recorded
/// - `400 Bad Request` - Team not in the match or clock outside the period
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Match does not exist
#[utoipa::path(
    post,
    path = "/api/matches/{id}/events",
    tag = MATCH_EVENT_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = CreateMatchEventDto,
    responses(
        (status = 201, description = "Event recorded", body = MatchEventDto),
        (status = 400, description = "Invalid event", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<CreateMatchEventDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let event = MatchEventService::new(&state.db)
        .create(CreateMatchEventParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// Edit an event or toggle its undone flag. Scores and fouls are recomputed from
/// the event log.
#[utoipa::path(
    put,
    path = "/api/matches/{id}/events/{event_id}",
    tag = MATCH_EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Match ID"),
        ("event_id" = i32, Path, description = "Event ID")
    ),
    request_body = UpdateMatchEventDto,
    responses(
        (status = 200, description = "Event updated", body = MatchEventDto),
        (status = 400, description = "Invalid event", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Match or event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, event_id)): Path<(i32, i32)>,
    AppJson(payload): AppJson<UpdateMatchEventDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let event = MatchEventService::new(&state.db)
        .update(id, event_id, UpdateMatchEventParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Permanently delete an event.
///
/// # Access Control
/// - `Admin` - Only admins can delete; editors undo instead
#[utoipa::path(
    delete,
    path = "/api/matches/{id}/events/{event_id}",
    tag = MATCH_EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Match ID"),
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Not logged in or not an admin", body = ErrorDto),
        (status = 404, description = "Match or event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, event_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    MatchEventService::new(&state.db)
        .delete(id, event_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/games/{id}/play-by-play",
    tag = MATCH_EVENT_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Counted events, newest first", body = Vec<PlayByPlayEntryDto>),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_play_by_play(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let entries = MatchEventService::new(&state.db).play_by_play(id).await?;

    Ok((StatusCode::OK, Json(entries)))
}

/// Per-player and per-team statistics aggregated from counted events.
#[utoipa::path(
    get,
    path = "/api/matches/{id}/box-score",
    tag = MATCH_EVENT_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Box score", body = BoxScoreDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_box_score(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let box_score = MatchEventService::new(&state.db).box_score(id).await?;

    Ok((StatusCode::OK, Json(box_score)))
}
