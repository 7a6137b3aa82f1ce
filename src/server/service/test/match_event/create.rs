use super::*;

/// Tests scoring events update the stored score for the right side.
///
/// Expected: 2-0 after a team 1 two, 2-3 after a team 2 three
#[tokio::test]
async fn scoring_events_update_score() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, team2, game) = factory::helpers::create_live_match(db).await?;
    let service = MatchEventService::new(db);

    service
        .create(team_event(game.id, EventType::TwoPointMade, team1.id))
        .await?;
    let after_two = reload(db, game.id).await?;
    assert_eq!((after_two.team1_score, after_two.team2_score), (2, 0));

    service
        .create(team_event(game.id, EventType::ThreePointMade, team2.id))
        .await?;
    let after_three = reload(db, game.id).await?;
    assert_eq!((after_three.team1_score, after_three.team2_score), (2, 3));

    Ok(())
}

/// Tests misses and other non-scoring plays leave the score alone.
///
/// Expected: 0-0
#[tokio::test]
async fn non_scoring_events_keep_score() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let service = MatchEventService::new(db);

    for event_type in [
        EventType::TwoPointMissed,
        EventType::FreeThrowMissed,
        EventType::DefensiveRebound,
    ] {
        service
            .create(team_event(game.id, event_type, team1.id))
            .await?;
    }

    let game = reload(db, game.id).await?;
    assert_eq!((game.team1_score, game.team2_score), (0, 0));

    Ok(())
}

/// Tests events are numbered 1, 2, 3 in recording order.
///
/// Expected: sequence numbers [1, 2, 3]
#[tokio::test]
async fn assigns_consecutive_sequence_numbers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let service = MatchEventService::new(db);

    let mut sequences = Vec::new();
    for event_type in [EventType::Steal, EventType::TwoPointMade, EventType::Block] {
        let event = service
            .create(team_event(game.id, event_type, team1.id))
            .await?;
        sequences.push(event.sequence_number);
    }

    assert_eq!(sequences, vec![1, 2, 3]);

    Ok(())
}

/// Tests an omitted period and clock are taken from the live state.
///
/// The match helper leaves the match in period 1 with 600 seconds on the clock.
///
/// Expected: period 1, 600 seconds remaining, minute 0
#[tokio::test]
async fn defaults_timing_to_live_state() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;

    let event = MatchEventService::new(db)
        .create(team_event(game.id, EventType::Steal, team1.id))
        .await?;

    assert_eq!(event.period, 1);
    assert_eq!(event.seconds_remaining, 600);
    assert_eq!(event.minute, 0);

    Ok(())
}

/// Tests the game minute counts the earlier periods.
///
/// Under default rules period 2 starts at minute 10, so 5:00 left in it is minute 15.
///
/// Expected: minute 15
#[tokio::test]
async fn derives_minute_from_period_and_clock() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;

    let event = MatchEventService::new(db)
        .create(team_event(game.id, EventType::Steal, team1.id).at(2, 300))
        .await?;

    assert_eq!(event.minute, 15);

    Ok(())
}

/// Tests a clock reading longer than the period is rejected.
///
/// Expected: Err(AppError::BadRequest), no event stored
#[tokio::test]
async fn rejects_clock_outside_period() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let service = MatchEventService::new(db);

    let result = service
        .create(team_event(game.id, EventType::TwoPointMade, team1.id).at(1, 601))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let events = service
        .get_by_match(game.id, MatchEventFilter::default())
        .await?;
    assert!(events.is_empty());

    Ok(())
}

/// Tests a period far beyond the overtime cap is rejected instead of overflowing
/// the game-minute arithmetic.
///
/// Expected: Err(AppError::BadRequest), no event stored, score unchanged
#[tokio::test]
async fn rejects_unbounded_period() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let service = MatchEventService::new(db);

    for period in [10_000_000, i32::MAX] {
        let result = service
            .create(team_event(game.id, EventType::TwoPointMade, team1.id).at(period, 0))
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    let events = service
        .get_by_match(game.id, MatchEventFilter::default())
        .await?;
    assert!(events.is_empty());
    let game = reload(db, game.id).await?;
    assert_eq!((game.team1_score, game.team2_score), (0, 0));

    Ok(())
}

/// Tests recording on a match that has not tipped off yet.
///
/// Expected: event lands at the opening moment (Q1, 600 s, minute 0), the score
/// updates and the match stays UPCOMING
#[tokio::test]
async fn records_on_upcoming_match() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_match_with_dependencies(db).await?;

    let event = MatchEventService::new(db)
        .create(team_event(game.id, EventType::TwoPointMade, team1.id))
        .await?;

    assert_eq!(event.period, 1);
    assert_eq!(event.seconds_remaining, 600);
    assert_eq!(event.minute, 0);
    let game = reload(db, game.id).await?;
    assert_eq!((game.team1_score, game.team2_score), (2, 0));
    assert_eq!(game.status, crate::model::matches::MatchStatus::Upcoming);

    Ok(())
}

/// Tests an event for a team that is not playing is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_team_not_in_match() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_live_match(db).await?;
    let outsider = factory::team::create_team(db, None).await?;

    let result = MatchEventService::new(db)
        .create(team_event(game.id, EventType::TwoPointMade, outsider.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests recording for a match that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_match() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MatchEventService::new(db)
        .create(CreateMatchEventParams::system(999, EventType::Steal))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests every foul type counts toward the current period's team fouls.
///
/// Expected: team 1 fouls 3, team 2 fouls 0
#[tokio::test]
async fn fouls_update_team_fouls() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let service = MatchEventService::new(db);

    for event_type in [
        EventType::PersonalFoul,
        EventType::OffensiveFoul,
        EventType::TechnicalFoul,
    ] {
        service
            .create(team_event(game.id, event_type, team1.id))
            .await?;
    }

    let game = reload(db, game.id).await?;
    assert_eq!((game.team1_fouls, game.team2_fouls), (3, 0));

    Ok(())
}

/// Tests a `PLAY_RESUMED` event moves the live period and clock to its own.
///
/// Expected: match in period 3 with 600 seconds on the clock
#[tokio::test]
async fn play_resumed_moves_live_clock() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_live_match(db).await?;

    MatchEventService::new(db)
        .create(CreateMatchEventParams::system(game.id, EventType::PlayResumed).at(3, 600))
        .await?;

    let game = reload(db, game.id).await?;
    assert_eq!(game.current_period, 3);
    assert_eq!(game.clock_seconds, 600);

    Ok(())
}
