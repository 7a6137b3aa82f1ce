//! SeaORM entity definitions for the courtside database.

pub mod prelude;

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
