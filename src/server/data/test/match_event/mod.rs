use crate::{
    model::match_event::EventType,
    server::{data::match_event::MatchEventRepository, model::match_event::MatchEventFilter},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_match;
mod get_counted_fouls;
mod get_play_by_play;
