//! Application errors and their HTTP mapping.
//!
//! Services and repositories return `AppError` and propagate with `?`. The conversion
//! into a response happens once, at the handler boundary, where the error is logged and
//! turned into an `ErrorDto` body: 400 for validation, 401 for auth, 404 for missing
//! rows and a generic 500 for everything else.

pub mod auth;
pub mod config;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Every failure a request can end in.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed environment at startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Session or role check failed. Always 401.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Query or transaction failure.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Password hashing or verification failure from bcrypt.
    #[error(transparent)]
    PasswordHashErr(#[from] bcrypt::BcryptError),

    /// Socket or listener failure while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A referenced league, match, event or other row does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Input rejected by validation or a game-state guard.
    #[error("{0}")]
    BadRequest(String),

    /// Server-side failure with a message meant only for the log.
    #[error("{0}")]
    InternalError(String),
}

/// Malformed or incomplete JSON bodies are client errors.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                tracing::debug!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs `E` and answers 500 with the generic body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
