use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UserDto},
    },
    server::{
        controller::AppJson,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::CreateUserParams,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all user accounts.
///
/// # Access Control
/// - `Admin` - Only admins can list accounts
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Not logged in or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a user account.
///
/// The password is hashed with bcrypt before it is stored. Emails are unique and
/// compared case-insensitively.
///
/// # Access Control
/// - `Admin` - Only admins can create accounts
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Invalid email, short password or duplicate email
/// - `401 Unauthorized` - Not logged in or not an admin
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid account data", body = ErrorDto),
        (status = 401, description = "Not logged in or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .create(CreateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}
