mod auth;
mod game;
mod game_rules;
mod match_event;
mod matches;
mod media;
mod news;
mod page;
mod user;
