use super::*;

fn full_timeout(match_id: i32, team_id: i32) -> CreateTimeoutParams {
    CreateTimeoutParams {
        match_id,
        team_id,
        kind: TimeoutKind::Full,
        period: None,
        seconds_remaining: None,
    }
}

/// Tests a timeout charges the team, stops the clock and logs an event.
///
/// Expected: 4 timeouts left for team 1, 5 for team 2, clock stopped, `TIMEOUT` event
#[tokio::test]
async fn timeout_charges_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let service = GameService::new(db);
    service.resume(game.id).await?;

    let timeout = service.create_timeout(full_timeout(game.id, team1.id)).await?;

    assert_eq!(timeout.team_id, team1.id);
    assert_eq!(timeout.period, 1);
    let game = reload(db, game.id).await?;
    assert_eq!((game.team1_timeouts, game.team2_timeouts), (4, 5));
    assert!(!game.clock_running);

    let events = MatchEventService::new(db)
        .get_by_match(game.id, MatchEventFilter::default())
        .await?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, EventType::Timeout);
    assert_eq!(events[0].description.as_deref(), Some("full timeout"));

    Ok(())
}

/// Tests a team with no timeouts left cannot call one.
///
/// Expected: Err(AppError::BadRequest), nothing recorded
#[tokio::test]
async fn rejects_when_no_timeouts_left() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team1 = factory::team::create_team(db, None).await?;
    let team2 = factory::team::create_team(db, None).await?;
    let game = factory::matches::MatchFactory::new(db, team1.id, team2.id)
        .status("LIVE")
        .current_period(1)
        .clock_seconds(600)
        .timeouts(0)
        .build()
        .await?;
    let service = GameService::new(db);

    let result = service.create_timeout(full_timeout(game.id, team1.id)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.timeouts(game.id).await?.is_empty());
    assert!(event_types(db, game.id).await?.is_empty());

    Ok(())
}

/// Tests a timeout for a team outside the match.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_team_not_in_match() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_live_match(db).await?;
    let outsider = factory::team::create_team(db, None).await?;

    let result = GameService::new(db)
        .create_timeout(full_timeout(game.id, outsider.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests timeouts can only be called while the match is live.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn requires_live_match() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_match_with_dependencies(db).await?;

    let result = GameService::new(db)
        .create_timeout(full_timeout(game.id, team1.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
