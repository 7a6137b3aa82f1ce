//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Game vocabulary such as event
//! types and match status is shared with the API layer and lives in `crate::model`.

pub mod box_score;
pub mod comment;
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
