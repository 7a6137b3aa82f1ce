//! HTTP handlers.
//!
//! Handlers check access with `AuthGuard`, convert request DTOs into service params and
//! convert the returned domain models back into DTOs. Reads of public content need no
//! login, writes need one, and deletes plus account, settings and rule management need
//! the admin role.

use axum::extract::FromRequest;

use crate::server::error::AppError;

pub mod auth;
pub mod game;
pub mod game_rules;
pub mod health;
pub mod league;
pub mod match_event;
pub mod matches;
pub mod media;
pub mod news;
pub mod page;
pub mod player;
pub mod season;
pub mod setting;
pub mod staff;
pub mod team;
pub mod user;

/// JSON body extractor whose rejections become `400` with an `ErrorDto` body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
