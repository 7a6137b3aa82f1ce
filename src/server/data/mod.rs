//! Database repository layer for all domain entities.
//!
//! Each repository wraps a connection handle and converts entity models into
//! domain models at the boundary. Repositories are generic over
//! `ConnectionTrait` so the same code runs on the pool and inside a transaction;
//! the game engine relies on this to keep event inserts and score updates atomic.

pub mod comment;
pub mod game_rules;
pub mod jump_ball;
pub mod league;
pub mod match_event;
pub mod match_period;
pub mod match_player;
pub mod matches;
pub mod media;
pub mod news_article;
pub mod page;
pub mod player;
pub mod season;
pub mod setting;
pub mod staff;
pub mod substitution;
pub mod team;
pub mod timeout;
pub mod user;

#[cfg(test)]
mod test;
