use super::*;

fn undo(is_undone: bool) -> UpdateMatchEventParams {
    UpdateMatchEventParams {
        is_undone: Some(is_undone),
        ..Default::default()
    }
}

/// Tests undoing a basket removes its points and restoring brings them back.
///
/// Expected: 3-0, then 0-0, then 3-0
#[tokio::test]
async fn undo_and_restore_scoring_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let service = MatchEventService::new(db);

    let event = service
        .create(team_event(game.id, EventType::ThreePointMade, team1.id))
        .await?;
    assert_eq!(reload(db, game.id).await?.team1_score, 3);

    let undone = service.update(game.id, event.id, undo(true)).await?;
    assert!(undone.is_undone);
    assert_eq!(reload(db, game.id).await?.team1_score, 0);

    service.update(game.id, event.id, undo(false)).await?;
    assert_eq!(reload(db, game.id).await?.team1_score, 3);

    Ok(())
}

/// Tests undoing the same event twice changes nothing the second time.
///
/// Expected: 2-0 after the first undo and after the repeat
#[tokio::test]
async fn repeated_undo_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let service = MatchEventService::new(db);

    service
        .create(team_event(game.id, EventType::TwoPointMade, team1.id))
        .await?;
    let second = service
        .create(team_event(game.id, EventType::TwoPointMade, team1.id))
        .await?;

    service.update(game.id, second.id, undo(true)).await?;
    let once = reload(db, game.id).await?;
    service.update(game.id, second.id, undo(true)).await?;
    let twice = reload(db, game.id).await?;

    assert_eq!(once.team1_score, 2);
    assert_eq!(twice.team1_score, 2);

    Ok(())
}

/// Tests reassigning a basket to the other team moves its points.
///
/// Expected: 2-0 before, 0-2 after
#[tokio::test]
async fn changing_team_moves_points() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, team2, game) = factory::helpers::create_live_match(db).await?;
    let service = MatchEventService::new(db);

    let event = service
        .create(team_event(game.id, EventType::TwoPointMade, team1.id))
        .await?;

    service
        .update(
            game.id,
            event.id,
            UpdateMatchEventParams {
                team_id: Some(Some(team2.id)),
                ..Default::default()
            },
        )
        .await?;

    let game = reload(db, game.id).await?;
    assert_eq!((game.team1_score, game.team2_score), (0, 2));

    Ok(())
}

/// Tests changing a made two into a made three rescores it.
///
/// Expected: team 1 score 3
#[tokio::test]
async fn changing_type_rescores() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let service = MatchEventService::new(db);

    let event = service
        .create(team_event(game.id, EventType::TwoPointMade, team1.id))
        .await?;

    let updated = service
        .update(
            game.id,
            event.id,
            UpdateMatchEventParams {
                event_type: Some(EventType::ThreePointMade),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.sequence_number, event.sequence_number);
    assert_eq!(reload(db, game.id).await?.team1_score, 3);

    Ok(())
}

/// Tests moving a foul out of the current period drops it from the team fouls.
///
/// Expected: team 1 fouls 1, then 0
#[tokio::test]
async fn moving_foul_to_other_period_recomputes_fouls() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let service = MatchEventService::new(db);

    let foul = service
        .create(team_event(game.id, EventType::PersonalFoul, team1.id))
        .await?;
    assert_eq!(reload(db, game.id).await?.team1_fouls, 1);

    service
        .update(
            game.id,
            foul.id,
            UpdateMatchEventParams {
                period: Some(2),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(reload(db, game.id).await?.team1_fouls, 0);

    Ok(())
}

/// Tests the minute is re-derived when the clock changes.
///
/// Expected: minute 4 for 6:00 left in period 1
#[tokio::test]
async fn rederives_minute() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let service = MatchEventService::new(db);

    let event = service
        .create(team_event(game.id, EventType::Steal, team1.id))
        .await?;

    let updated = service
        .update(
            game.id,
            event.id,
            UpdateMatchEventParams {
                seconds_remaining: Some(360),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.minute, 4);

    Ok(())
}

/// Tests updating an event through the wrong match.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_event_of_other_match() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let (_, _, other) = factory::helpers::create_live_match(db).await?;
    let service = MatchEventService::new(db);

    let event = service
        .create(team_event(game.id, EventType::Steal, team1.id))
        .await?;

    let result = service.update(other.id, event.id, undo(true)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
