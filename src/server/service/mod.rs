//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate input against
//! the domain rules, coordinate several repository calls and own the transactions for
//! multi-step operations such as recording a match event or closing a period.

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

#[cfg(test)]
mod test;
