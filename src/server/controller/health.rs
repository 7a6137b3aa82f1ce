use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::ConnectionTrait;

use crate::{
    model::api::{ErrorDto, StatusDto},
    server::{error::AppError, state::AppState},
};

pub static HEALTH_TAG: &str = "health";

/// Liveness check that also round-trips the database.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service and database reachable", body = StatusDto),
        (status = 500, description = "Database unreachable", body = ErrorDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.db.execute_unprepared("SELECT 1").await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            status: "ok".to_string(),
        }),
    ))
}
