use super::*;

/// Tests scheduling a team against itself.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_same_team_twice() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db, None).await?;

    let result = MatchService::new(db).create(fixture(team.id, team.id)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests scheduling against a team that does not exist.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_missing_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db, None).await?;

    let result = MatchService::new(db).create(fixture(team.id, 999)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a new match starts upcoming with a clean score.
///
/// Expected: Ok(Match) UPCOMING, 0-0, period 0
#[tokio::test]
async fn schedules_upcoming_match() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::team::create_team(db, None).await?;
    let away = factory::team::create_team(db, None).await?;

    let game = MatchService::new(db).create(fixture(home.id, away.id)).await?;

    assert_eq!(game.status, MatchStatus::Upcoming);
    assert_eq!((game.team1_score, game.team2_score), (0, 0));
    assert_eq!(game.current_period, 0);

    Ok(())
}
