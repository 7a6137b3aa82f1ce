use crate::{
    model::{game::TimeoutKind, match_event::EventType, matches::MatchStatus},
    server::{
        data::{match_player::MatchPlayerRepository, matches::MatchRepository},
        error::AppError,
        model::{
            game::{
                CreateJumpBallParams, CreateSubstitutionParams, CreateTimeoutParams,
                UpdateGameStateParams,
            },
            match_event::{CreateMatchEventParams, MatchEventFilter},
            matches::{Match, TeamSide},
        },
        service::{game::GameService, match_event::MatchEventService},
    },
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod lifecycle;
mod substitution;
mod timeout;

async fn reload(db: &DatabaseConnection, match_id: i32) -> Result<Match, AppError> {
    MatchRepository::new(db)
        .find_by_id(match_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Match {} not found", match_id)))
}

async fn event_types(db: &DatabaseConnection, match_id: i32) -> Result<Vec<EventType>, AppError> {
    Ok(MatchEventService::new(db)
        .get_by_match(match_id, MatchEventFilter::default())
        .await?
        .into_iter()
        .map(|event| event.event_type)
        .collect())
}
