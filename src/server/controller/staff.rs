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
        staff::{CreateStaffDto, StaffDto, UpdateStaffDto},
    },
    server::{
        controller::AppJson,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::staff::{CreateStaffParams, UpdateStaffParams},
        service::staff::StaffService,
        state::AppState,
    },
};

/// Tag for grouping staff endpoints in OpenAPI documentation
pub static STAFF_TAG: &str = "staff";

#[derive(Deserialize)]
pub struct StaffQuery {
    pub team_id: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/staff",
    tag = STAFF_TAG,
    params(("team_id" = Option<i32>, Query, description = "Only staff of this team")),
    responses(
        (status = 200, description = "Staff members", body = Vec<StaffDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_staff(
    State(state): State<AppState>,
    Query(query): Query<StaffQuery>,
) -> Result<impl IntoResponse, AppError> {
    let staff = StaffService::new(&state.db).get_all(query.team_id).await?;

    Ok((
        StatusCode::OK,
        Json(staff.into_iter().map(|s| s.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/staff/{id}",
    tag = STAFF_TAG,
    params(("id" = i32, Path, description = "Staff member ID")),
    responses(
        (status = 200, description = "Staff member", body = StaffDto),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_staff_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let staff = StaffService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(staff.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/staff",
    tag = STAFF_TAG,
    request_body = CreateStaffDto,
    responses(
        (status = 201, description = "Staff member created", body = StaffDto),
        (status = 400, description = "Invalid staff data or unknown team", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_staff(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateStaffDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let staff = StaffService::new(&state.db)
        .create(CreateStaffParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(staff.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/staff/{id}",
    tag = STAFF_TAG,
    params(("id" = i32, Path, description = "Staff member ID")),
    request_body = UpdateStaffDto,
    responses(
        (status = 200, description = "Staff member updated", body = StaffDto),
        (status = 400, description = "Invalid staff data or unknown team", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_staff(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateStaffDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let staff = StaffService::new(&state.db)
        .update(UpdateStaffParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(staff.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/staff/{id}",
    tag = STAFF_TAG,
    params(("id" = i32, Path, description = "Staff member ID")),
    responses(
        (status = 204, description = "Staff member deleted"),
        (status = 401, description = "Not logged in or not an admin", body = ErrorDto),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_staff(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    StaffService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
