use crate::{
    model::match_event::EventType,
    server::{
        data::matches::MatchRepository,
        error::AppError,
        model::{
            match_event::{CreateMatchEventParams, MatchEventFilter, UpdateMatchEventParams},
            matches::Match,
        },
        service::match_event::MatchEventService,
    },
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod play_by_play;
mod update;

fn team_event(match_id: i32, event_type: EventType, team_id: i32) -> CreateMatchEventParams {
    CreateMatchEventParams::system(match_id, event_type).for_team(team_id)
}

async fn reload(db: &DatabaseConnection, match_id: i32) -> Result<Match, AppError> {
    MatchRepository::new(db)
        .find_by_id(match_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Match {} not found", match_id)))
}
