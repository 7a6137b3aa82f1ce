use super::*;

fn swap(match_id: i32, team_id: i32, player_in_id: i32, player_out_id: i32) -> CreateSubstitutionParams {
    CreateSubstitutionParams {
        match_id,
        team_id,
        player_in_id,
        player_out_id,
        period: None,
        seconds_remaining: None,
    }
}

/// Tests a substitution swaps the on-court flags and logs the incoming player.
///
/// Expected: bench player on court, starter on the bench, `SUBSTITUTION` event
#[tokio::test]
async fn swaps_players() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let (starter, _) = factory::helpers::create_rostered_player(db, game.id, team1.id, true).await?;
    let (bench, _) = factory::helpers::create_rostered_player(db, game.id, team1.id, false).await?;
    let service = GameService::new(db);

    let substitution = service
        .create_substitution(swap(game.id, team1.id, bench.id, starter.id))
        .await?;

    assert_eq!(substitution.player_in_id, bench.id);
    assert_eq!(substitution.player_out_id, starter.id);

    let roster = MatchPlayerRepository::new(db);
    let starter_entry = roster.find(game.id, starter.id).await?.unwrap();
    let bench_entry = roster.find(game.id, bench.id).await?.unwrap();
    assert!(!starter_entry.on_court);
    assert!(bench_entry.on_court);

    let events = MatchEventService::new(db)
        .get_by_match(game.id, MatchEventFilter::default())
        .await?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, EventType::Substitution);
    assert_eq!(events[0].player_id, Some(bench.id));
    assert_eq!(service.substitutions(game.id).await?.len(), 1);

    Ok(())
}

/// Tests the outgoing player must be on the court.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_outgoing_player_on_bench() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let (first, _) = factory::helpers::create_rostered_player(db, game.id, team1.id, false).await?;
    let (second, _) = factory::helpers::create_rostered_player(db, game.id, team1.id, false).await?;

    let result = GameService::new(db)
        .create_substitution(swap(game.id, team1.id, first.id, second.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the incoming player must not already be on the court.
///
/// Expected: Err(AppError::BadRequest), flags unchanged
#[tokio::test]
async fn rejects_incoming_player_on_court() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let (first, _) = factory::helpers::create_rostered_player(db, game.id, team1.id, true).await?;
    let (second, _) = factory::helpers::create_rostered_player(db, game.id, team1.id, true).await?;

    let result = GameService::new(db)
        .create_substitution(swap(game.id, team1.id, first.id, second.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let entry = MatchPlayerRepository::new(db)
        .find(game.id, second.id)
        .await?
        .unwrap();
    assert!(entry.on_court);

    Ok(())
}

/// Tests a player cannot replace themselves.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_same_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let (starter, _) = factory::helpers::create_rostered_player(db, game.id, team1.id, true).await?;

    let result = GameService::new(db)
        .create_substitution(swap(game.id, team1.id, starter.id, starter.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests both players must be on the substituting team's roster.
///
/// Expected: Err(AppError::BadRequest) when bringing in an opponent
#[tokio::test]
async fn rejects_player_from_other_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, team2, game) = factory::helpers::create_live_match(db).await?;
    let (starter, _) = factory::helpers::create_rostered_player(db, game.id, team1.id, true).await?;
    let (opponent, _) = factory::helpers::create_rostered_player(db, game.id, team2.id, false).await?;

    let result = GameService::new(db)
        .create_substitution(swap(game.id, team1.id, opponent.id, starter.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
