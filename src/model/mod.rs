//! Request and response DTOs shared by the HTTP API and its OpenAPI document.

pub mod api;
pub mod auth;
pub mod game;
pub mod game_rules;
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
