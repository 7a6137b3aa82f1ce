//! Shared helper utilities for factory methods.
//!
//! Provides ID generation used across all factories and convenience methods for
//! creating entities together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates two teams and an `UPCOMING` match between them.
///
/// The match has no game rules attached, so default rules apply.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((team1, team2, match))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_match_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::team::Model,
        entity::team::Model,
        entity::matches::Model,
    ),
    DbErr,
> {
    let team1 = crate::factory::team::create_team(db, None).await?;
    let team2 = crate::factory::team::create_team(db, None).await?;
    let game = crate::factory::matches::create_match(db, team1.id, team2.id).await?;

    Ok((team1, team2, game))
}

/// Creates a `LIVE` match in period 1 with a full 10 minute clock.
///
/// Mirrors the state `start_game` leaves a match in under default rules, without
/// creating the period row. Useful for tests that only exercise event recording.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((team1, team2, match))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_live_match(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::team::Model,
        entity::team::Model,
        entity::matches::Model,
    ),
    DbErr,
> {
    let team1 = crate::factory::team::create_team(db, None).await?;
    let team2 = crate::factory::team::create_team(db, None).await?;
    let game = crate::factory::matches::MatchFactory::new(db, team1.id, team2.id)
        .status("LIVE")
        .current_period(1)
        .clock_seconds(600)
        .timeouts(5)
        .build()
        .await?;

    Ok((team1, team2, game))
}

/// Creates a player on the given team and adds them to the match roster.
///
/// # Arguments
/// - `db` - Database connection
/// - `match_id` - Match to add the player to
/// - `team_id` - Team the player belongs to
/// - `on_court` - Whether the player starts on court
///
/// # Returns
/// - `Ok((player, match_player))` - The player and their roster entry
/// - `Err(DbErr)` - Database error during creation
pub async fn create_rostered_player(
    db: &DatabaseConnection,
    match_id: i32,
    team_id: i32,
    on_court: bool,
) -> Result<(entity::player::Model, entity::match_player::Model), DbErr> {
    let player = crate::factory::player::create_player(db, Some(team_id)).await?;
    let entry = crate::factory::match_player::MatchPlayerFactory::new(db, match_id, player.id, team_id)
        .is_starter(on_court)
        .on_court(on_court)
        .build()
        .await?;

    Ok((player, entry))
}
