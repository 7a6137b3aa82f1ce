use super::*;

fn set_status(id: i32, status: MatchStatus) -> UpdateMatchParams {
    UpdateMatchParams {
        id,
        status: Some(status),
        ..Default::default()
    }
}

/// Tests an upcoming match cannot be switched to live by editing it.
///
/// Expected: Err(BadRequest) and the match still UPCOMING in period 0
#[tokio::test]
async fn rejects_going_live_without_start() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_match_with_dependencies(db).await?;
    let service = MatchService::new(db);

    let result = service.update(set_status(game.id, MatchStatus::Live)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let stored = service.get_by_id(game.id).await?;
    assert_eq!(stored.status, MatchStatus::Upcoming);
    assert_eq!(stored.current_period, 0);

    Ok(())
}

/// Tests the other status moves stay open to editors.
///
/// Expected: a live match can be marked COMPLETED, then moved back to UPCOMING
#[tokio::test]
async fn allows_completing_and_rescheduling() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_live_match(db).await?;
    let service = MatchService::new(db);

    let completed = service
        .update(set_status(game.id, MatchStatus::Completed))
        .await?;
    assert_eq!(completed.status, MatchStatus::Completed);

    let upcoming = service
        .update(set_status(game.id, MatchStatus::Upcoming))
        .await?;
    assert_eq!(upcoming.status, MatchStatus::Upcoming);

    Ok(())
}

/// Tests a live match may be saved with its status unchanged.
///
/// Expected: Ok(Match) still LIVE with the new venue
#[tokio::test]
async fn keeps_live_status_on_edit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_live_match(db).await?;

    let updated = MatchService::new(db)
        .update(UpdateMatchParams {
            id: game.id,
            venue: Some(Some("Main Arena".to_string())),
            status: Some(MatchStatus::Live),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.status, MatchStatus::Live);
    assert_eq!(updated.venue.as_deref(), Some("Main Arena"));

    Ok(())
}
