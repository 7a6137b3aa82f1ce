use super::*;

/// Tests deleting a basket recomputes the score.
///
/// Expected: 3-0 after deleting one of two team 1 baskets
#[tokio::test]
async fn deleting_scoring_event_recomputes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let service = MatchEventService::new(db);

    let two = service
        .create(team_event(game.id, EventType::TwoPointMade, team1.id))
        .await?;
    service
        .create(team_event(game.id, EventType::ThreePointMade, team1.id))
        .await?;

    service.delete(game.id, two.id).await?;

    assert_eq!(reload(db, game.id).await?.team1_score, 3);

    Ok(())
}

/// Tests deleting a non-scoring event does not touch the stored score.
///
/// The seeded 7-3 score has no backing events, so any recomputation would zero it.
///
/// Expected: 7-3 after the delete
#[tokio::test]
async fn deleting_non_scoring_event_keeps_score() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team1 = factory::team::create_team(db, None).await?;
    let team2 = factory::team::create_team(db, None).await?;
    let game = factory::matches::MatchFactory::new(db, team1.id, team2.id)
        .status("LIVE")
        .current_period(1)
        .clock_seconds(600)
        .scores(7, 3)
        .build()
        .await?;
    let steal = factory::match_event::create_match_event(db, game.id, team1.id, "STEAL", 1).await?;

    MatchEventService::new(db).delete(game.id, steal.id).await?;

    let game = reload(db, game.id).await?;
    assert_eq!((game.team1_score, game.team2_score), (7, 3));

    Ok(())
}

/// Tests deleting an event that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_live_match(db).await?;

    let result = MatchEventService::new(db).delete(game.id, 999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Walks a short game: a team 1 two, a team 2 three, then the two is undone.
///
/// Expected: 2-0, 2-3, 0-3
#[tokio::test]
async fn score_follows_event_log() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, team2, game) = factory::helpers::create_live_match(db).await?;
    let service = MatchEventService::new(db);

    let two = service
        .create(team_event(game.id, EventType::TwoPointMade, team1.id))
        .await?;
    let score = reload(db, game.id).await?;
    assert_eq!((score.team1_score, score.team2_score), (2, 0));

    service
        .create(team_event(game.id, EventType::ThreePointMade, team2.id))
        .await?;
    let score = reload(db, game.id).await?;
    assert_eq!((score.team1_score, score.team2_score), (2, 3));

    service
        .update(
            game.id,
            two.id,
            UpdateMatchEventParams {
                is_undone: Some(true),
                ..Default::default()
            },
        )
        .await?;
    let score = reload(db, game.id).await?;
    assert_eq!((score.team1_score, score.team2_score), (0, 3));

    Ok(())
}
