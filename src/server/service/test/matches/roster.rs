use super::*;

fn entry(match_id: i32, player_id: i32, team_id: i32) -> AddMatchPlayerParams {
    AddMatchPlayerParams {
        match_id,
        player_id,
        team_id,
        jersey_number: None,
        is_starter: false,
    }
}

/// Tests rostering a player for a team that is not playing.
///
/// Expected: Err(BadRequest) and an empty roster
#[tokio::test]
async fn rejects_team_not_in_match() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_match_with_dependencies(db).await?;
    let outsider = factory::team::create_team(db, None).await?;
    let player = factory::player::create_player(db, Some(outsider.id)).await?;

    let service = MatchService::new(db);
    let result = service
        .add_player(entry(game.id, player.id, outsider.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.get_roster(game.id).await?.is_empty());

    Ok(())
}

/// Tests the same player cannot be rostered twice.
///
/// Expected: first add succeeds, second Err(BadRequest)
#[tokio::test]
async fn rejects_duplicate_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_match_with_dependencies(db).await?;
    let player = factory::player::create_player(db, Some(team1.id)).await?;

    let service = MatchService::new(db);
    let added = service.add_player(entry(game.id, player.id, team1.id)).await?;
    assert_eq!(added.team_id, team1.id);

    let result = service.add_player(entry(game.id, player.id, team1.id)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get_roster(game.id).await?.len(), 1);

    Ok(())
}
