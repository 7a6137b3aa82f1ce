use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        setting::{SettingDto, UpdateSettingDto},
    },
    server::{
        controller::AppJson,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::setting::SettingService,
        state::AppState,
    },
};

/// Tag for grouping site setting endpoints in OpenAPI documentation
pub static SETTING_TAG: &str = "setting";

#[utoipa::path(
    get,
    path = "/api/settings",
    tag = SETTING_TAG,
    responses(
        (status = 200, description = "All settings ordered by key", body = Vec<SettingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let settings = SettingService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(settings.into_iter().map(|s| s.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/settings/{key}",
    tag = SETTING_TAG,
    params(("key" = String, Path, description = "Setting key")),
    responses(
        (status = 200, description = "Setting", body = SettingDto),
        (status = 404, description = "Setting not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let setting = SettingService::new(&state.db).get(&key).await?;

    Ok((StatusCode::OK, Json(setting.into_dto())))
}

/// Create or replace a setting.
///
/// # Access Control
/// - `Admin` - Only admins can change settings
#[utoipa::path(
    put,
    path = "/api/settings/{key}",
    tag = SETTING_TAG,
    params(("key" = String, Path, description = "Setting key")),
    request_body = UpdateSettingDto,
    responses(
        (status = 200, description = "Setting stored", body = SettingDto),
        (status = 400, description = "Invalid key", body = ErrorDto),
        (status = 401, description = "Not logged in or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_setting(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(key): Path<String>,
    AppJson(payload): AppJson<UpdateSettingDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let setting = SettingService::new(&state.db)
        .set(&key, payload.value)
        .await?;

    Ok((StatusCode::OK, Json(setting.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/settings/{key}",
    tag = SETTING_TAG,
    params(("key" = String, Path, description = "Setting key")),
    responses(
        (status = 204, description = "Setting deleted"),
        (status = 401, description = "Not logged in or not an admin", body = ErrorDto),
        (status = 404, description = "Setting not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_setting(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    SettingService::new(&state.db).delete(&key).await?;

    Ok(StatusCode::NO_CONTENT)
}
