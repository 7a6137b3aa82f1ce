use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, auth::LoginDto, user::UserDto},
    server::{
        controller::AppJson,
        error::AppError,
        middleware::{
            auth::AuthGuard,
            session::{build_auth_cookie, build_clear_cookie},
        },
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with email and password.
///
/// On success the signed session token is set as the HTTP-only `auth-token` cookie and
/// the user is returned. Unknown emails and wrong passwords give the same 401.
///
/// # Returns
/// - `200 OK` - Logged in, cookie set
/// - `400 Bad Request` - Malformed body
/// - `401 Unauthorized` - Invalid email or password
/// - `429 Too Many Requests` - Rate limit for this client exceeded
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 429, description = "Too many login attempts"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (user, token) = AuthService::new(&state.db, &state.jwt)
        .login(&payload.email, &payload.password)
        .await?;

    let cookie = build_auth_cookie(&token, state.secure_cookies);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(user.into_dto()),
    ))
}

/// Log out by clearing the auth cookie.
///
/// Tokens are stateless, so this always succeeds.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Cookie cleared")
    ),
)]
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, build_clear_cookie(state.secure_cookies))],
    )
}

/// Get the logged-in user.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
