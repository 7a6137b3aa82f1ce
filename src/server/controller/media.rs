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
        media::{CreateMediaDto, MediaDto, UpdateMediaDto},
    },
    server::{
        controller::AppJson,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::media::{CreateMediaParams, MediaFilter, UpdateMediaParams},
        service::media::MediaService,
        state::AppState,
    },
};

/// Tag for grouping media library endpoints in OpenAPI documentation
pub static MEDIA_TAG: &str = "media";

#[derive(Deserialize)]
pub struct MediaQuery {
    pub mime_type: Option<String>,
}

/// List the media library, newest first.
#[utoipa::path(
    get,
    path = "/api/media",
    tag = MEDIA_TAG,
    params((
        "mime_type" = Option<String>, Query,
        description = "Full MIME type (image/png) or top-level type (image)"
    )),
    responses(
        (status = 200, description = "Media entries", body = Vec<MediaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_media(
    State(state): State<AppState>,
    Query(query): Query<MediaQuery>,
) -> Result<impl IntoResponse, AppError> {
    let media = MediaService::new(&state.db)
        .get_all(MediaFilter {
            mime_type: query.mime_type.map(|m| m.to_ascii_lowercase()),
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(media.into_iter().map(|m| m.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/media/{id}",
    tag = MEDIA_TAG,
    params(("id" = i32, Path, description = "Media ID")),
    responses(
        (status = 200, description = "Media entry", body = MediaDto),
        (status = 404, description = "Media not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_media_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let media = MediaService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(media.into_dto())))
}

/// Register a stored file in the media library, credited to the logged-in user.
///
/// # Returns
/// - `201 Created` - Entry created
/// - `400 Bad Request` - Blank filename, malformed URL or MIME type
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/media",
    tag = MEDIA_TAG,
    request_body = CreateMediaDto,
    responses(
        (status = 201, description = "Media registered", body = MediaDto),
        (status = 400, description = "Invalid media data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_media(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateMediaDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let media = MediaService::new(&state.db)
        .create(CreateMediaParams::from_dto(payload, Some(user.id)))
        .await?;

    Ok((StatusCode::CREATED, Json(media.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/media/{id}",
    tag = MEDIA_TAG,
    params(("id" = i32, Path, description = "Media ID")),
    request_body = UpdateMediaDto,
    responses(
        (status = 200, description = "Media updated", body = MediaDto),
        (status = 400, description = "Invalid media data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Media not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_media(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateMediaDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let media = MediaService::new(&state.db)
        .update(UpdateMediaParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(media.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/media/{id}",
    tag = MEDIA_TAG,
    params(("id" = i32, Path, description = "Media ID")),
    responses(
        (status = 204, description = "Media entry deleted"),
        (status = 401, description = "Not logged in or not an admin", body = ErrorDto),
        (status = 404, description = "Media not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_media(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    MediaService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
