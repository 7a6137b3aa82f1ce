use super::*;

/// Tests tip-off puts an upcoming match live with a full clock and an open period.
///
/// Expected: LIVE, period 1, 600 seconds, stopped clock, 5 timeouts each, one period row
#[tokio::test]
async fn start_opens_first_period() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_match_with_dependencies(db).await?;
    let service = GameService::new(db);

    let started = service.start(game.id).await?;

    assert_eq!(started.status, MatchStatus::Live);
    assert_eq!(started.current_period, 1);
    assert_eq!(started.clock_seconds, 600);
    assert!(!started.clock_running);
    assert_eq!((started.team1_timeouts, started.team2_timeouts), (5, 5));

    let periods = service.periods(game.id).await?;
    assert_eq!(periods.len(), 1);
    assert_eq!(periods[0].period, 1);
    assert!(periods[0].ended_at.is_none());

    Ok(())
}

/// Tests tip-off uses the attached rule set's period length and timeouts.
///
/// Expected: 720 seconds on the clock, 3 timeouts each
#[tokio::test]
async fn start_uses_attached_rules() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rules = factory::game_rules::GameRulesFactory::new(db)
        .minutes_per_period(12)
        .timeouts_per_team(3)
        .build()
        .await?;
    let team1 = factory::team::create_team(db, None).await?;
    let team2 = factory::team::create_team(db, None).await?;
    let game = factory::matches::MatchFactory::new(db, team1.id, team2.id)
        .game_rules_id(Some(rules.id))
        .build()
        .await?;

    let started = GameService::new(db).start(game.id).await?;

    assert_eq!(started.clock_seconds, 720);
    assert_eq!((started.team1_timeouts, started.team2_timeouts), (3, 3));

    Ok(())
}

/// Tests a match cannot be started twice.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn start_requires_upcoming() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_live_match(db).await?;

    let result = GameService::new(db).start(game.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests resume runs the clock and pause stops it at the given reading.
///
/// Expected: running after resume, stopped at 432 after pause
#[tokio::test]
async fn pause_and_resume_toggle_clock() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_live_match(db).await?;
    let service = GameService::new(db);

    let running = service.resume(game.id).await?;
    assert!(running.clock_running);

    let paused = service.pause(game.id, Some(432)).await?;
    assert!(!paused.clock_running);
    assert_eq!(paused.clock_seconds, 432);

    Ok(())
}

/// Tests clock control on a match that has not started.
///
/// Expected: Err(AppError::BadRequest) for pause and resume
#[tokio::test]
async fn clock_control_requires_live() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_match_with_dependencies(db).await?;
    let service = GameService::new(db);

    assert!(matches!(
        service.resume(game.id).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.pause(game.id, None).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests a pause reading longer than the period is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn pause_rejects_clock_out_of_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_live_match(db).await?;

    let result = GameService::new(db).pause(game.id, Some(900)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests manual possession changes, including clearing it.
///
/// Expected: possession team 2, then none
#[tokio::test]
async fn update_state_sets_and_clears_possession() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team2, game) = factory::helpers::create_live_match(db).await?;
    let service = GameService::new(db);

    let state = service
        .update_state(
            game.id,
            UpdateGameStateParams {
                clock_seconds: None,
                possession_team_id: Some(Some(team2.id)),
            },
        )
        .await?;
    assert_eq!(state.game.possession_team_id, Some(team2.id));

    let state = service
        .update_state(
            game.id,
            UpdateGameStateParams {
                clock_seconds: Some(120),
                possession_team_id: Some(None),
            },
        )
        .await?;
    assert_eq!(state.game.possession_team_id, None);
    assert_eq!(state.game.clock_seconds, 120);

    Ok(())
}

/// Tests the bonus flag follows the opponent's team fouls.
///
/// Expected: team 1 in the bonus after five team 2 fouls, team 2 not
#[tokio::test]
async fn state_reports_bonus() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team2, game) = factory::helpers::create_live_match(db).await?;
    let events = MatchEventService::new(db);
    for _ in 0..5 {
        events
            .create(CreateMatchEventParams::system(game.id, EventType::PersonalFoul).for_team(team2.id))
            .await?;
    }

    let state = GameService::new(db).state(game.id).await?;

    assert!(state.in_bonus(TeamSide::Team1));
    assert!(!state.in_bonus(TeamSide::Team2));

    Ok(())
}

/// Tests ending a regular period: snapshot, full clock, fouls cleared, no events.
///
/// Expected: period 2 with 600 seconds, fouls 0-0, period 1 row closed with the 2-0 score
#[tokio::test]
async fn end_period_moves_to_next_period() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_match_with_dependencies(db).await?;
    let service = GameService::new(db);
    service.start(game.id).await?;

    let events = MatchEventService::new(db);
    events
        .create(CreateMatchEventParams::system(game.id, EventType::TwoPointMade).for_team(game.team1_id))
        .await?;
    events
        .create(CreateMatchEventParams::system(game.id, EventType::PersonalFoul).for_team(game.team2_id))
        .await?;

    let next = service.end_period(game.id).await?;

    assert_eq!(next.current_period, 2);
    assert_eq!(next.clock_seconds, 600);
    assert_eq!((next.team1_fouls, next.team2_fouls), (0, 0));
    assert_eq!((next.team1_score, next.team2_score), (2, 0));

    let periods = service.periods(game.id).await?;
    assert_eq!(periods.len(), 2);
    assert!(periods[0].ended_at.is_some());
    assert_eq!((periods[0].team1_score, periods[0].team2_score), (2, 0));
    assert_eq!(periods[0].team2_fouls, 1);

    assert_eq!(
        event_types(db, game.id).await?,
        vec![EventType::TwoPointMade, EventType::PersonalFoul]
    );

    Ok(())
}

/// Tests the last allowed overtime cannot be followed by another.
///
/// Expected: Err(BadRequest) and the match still in period 24
#[tokio::test]
async fn end_period_stops_at_overtime_cap() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team1 = factory::team::create_team(db, None).await?;
    let team2 = factory::team::create_team(db, None).await?;
    let game = factory::matches::MatchFactory::new(db, team1.id, team2.id)
        .status("LIVE")
        .current_period(24)
        .clock_seconds(0)
        .build()
        .await?;

    let result = GameService::new(db).end_period(game.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(reload(db, game.id).await?.current_period, 24);

    Ok(())
}

/// Tests ending the halftime period records a break and the restart, in order.
///
/// Expected: `BREAK` at 0:00 of period 2, then `PLAY_RESUMED` at 10:00 of period 3
#[tokio::test]
async fn end_period_at_halftime_records_break() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_match_with_dependencies(db).await?;
    let service = GameService::new(db);
    service.start(game.id).await?;
    service.end_period(game.id).await?;

    let third = service.end_period(game.id).await?;
    assert_eq!(third.current_period, 3);
    assert_eq!(third.clock_seconds, 600);

    let events = MatchEventService::new(db)
        .get_by_match(game.id, MatchEventFilter::default())
        .await?;
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_type, EventType::Break);
    assert_eq!((events[0].period, events[0].seconds_remaining), (2, 0));
    assert_eq!(events[0].description.as_deref(), Some("Halftime"));
    assert_eq!(events[1].event_type, EventType::PlayResumed);
    assert_eq!((events[1].period, events[1].seconds_remaining), (3, 600));
    assert!(events[0].sequence_number < events[1].sequence_number);

    Ok(())
}

/// Tests timeouts are restored each period when the rule set says so.
///
/// Expected: 2 timeouts left after one is used, 2 again after the period ends
#[tokio::test]
async fn end_period_resets_timeouts_when_configured() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rules = factory::game_rules::GameRulesFactory::new(db)
        .timeouts_per_team(2)
        .reset_timeouts_each_period(true)
        .build()
        .await?;
    let team1 = factory::team::create_team(db, None).await?;
    let team2 = factory::team::create_team(db, None).await?;
    let game = factory::matches::MatchFactory::new(db, team1.id, team2.id)
        .game_rules_id(Some(rules.id))
        .build()
        .await?;
    let service = GameService::new(db);
    service.start(game.id).await?;

    service
        .create_timeout(CreateTimeoutParams {
            match_id: game.id,
            team_id: team1.id,
            kind: TimeoutKind::Full,
            period: None,
            seconds_remaining: None,
        })
        .await?;
    assert_eq!(reload(db, game.id).await?.team1_timeouts, 1);

    let next = service.end_period(game.id).await?;

    assert_eq!(next.team1_timeouts, 2);

    Ok(())
}

/// Tests ending the game closes the period and completes the match.
///
/// Expected: COMPLETED with a stopped clock, every period row closed
#[tokio::test]
async fn end_game_completes_match() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_match_with_dependencies(db).await?;
    let service = GameService::new(db);
    service.start(game.id).await?;
    service.resume(game.id).await?;

    let finished = service.end_game(game.id).await?;

    assert_eq!(finished.status, MatchStatus::Completed);
    assert!(!finished.clock_running);
    assert!(service
        .periods(game.id)
        .await?
        .iter()
        .all(|period| period.ended_at.is_some()));

    let again = service.end_game(game.id).await;
    assert!(matches!(again, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a jump ball gives possession to the winner and logs an event.
///
/// Expected: possession team 2, one `JUMP_BALL` event for team 2
#[tokio::test]
async fn jump_ball_sets_possession() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, team2, game) = factory::helpers::create_live_match(db).await?;
    let service = GameService::new(db);

    let jump_ball = service
        .create_jump_ball(CreateJumpBallParams {
            match_id: game.id,
            team1_player_id: None,
            team2_player_id: None,
            winner_team_id: team2.id,
            period: None,
            seconds_remaining: None,
        })
        .await?;

    assert_eq!(jump_ball.winner_team_id, team2.id);
    assert_eq!(reload(db, game.id).await?.possession_team_id, Some(team2.id));

    let events = MatchEventService::new(db)
        .get_by_match(game.id, MatchEventFilter::default())
        .await?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, EventType::JumpBall);
    assert_eq!(events[0].team_id, Some(team2.id));
    assert_eq!(service.jump_balls(game.id).await?.len(), 1);

    Ok(())
}
