use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `auth-token` cookie was sent with the request.
    #[error("Request has no auth token")]
    MissingToken,

    /// The token failed signature or expiry validation, or its subject is malformed.
    #[error("Invalid auth token: {0}")]
    InvalidToken(String),

    /// The token is valid but its user no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// The user lacks the role required for the operation.
    ///
    /// # Fields
    /// - User ID
    /// - Description of the denied action for the server log
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login with an unknown email or a wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant answers 401 Unauthorized, including a wrong role. Details are logged at
/// debug level while the client only sees a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::InvalidCredentials => "Invalid email or password",
            _ => "Unauthorized",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
