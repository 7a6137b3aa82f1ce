use crate::{
    model::matches::MatchStatus,
    server::{
        error::AppError,
        model::matches::{AddMatchPlayerParams, CreateMatchParams, UpdateMatchParams},
        service::matches::MatchService,
    },
};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod roster;
mod update;

fn fixture(team1_id: i32, team2_id: i32) -> CreateMatchParams {
    CreateMatchParams {
        team1_id,
        team2_id,
        league_id: None,
        season_id: None,
        game_rules_id: None,
        venue: None,
        scheduled_at: Utc::now(),
    }
}
