use super::*;

/// Tests the feed is newest first, skips undone events and resolves names.
///
/// Expected: the steal then the basket, with team name, `Q1` and `10:00`
#[tokio::test]
async fn lists_counted_events_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let service = MatchEventService::new(db);

    let basket = service
        .create(team_event(game.id, EventType::TwoPointMade, team1.id))
        .await?;
    let mistake = service
        .create(team_event(game.id, EventType::Turnover, team1.id))
        .await?;
    let steal = service
        .create(team_event(game.id, EventType::Steal, team1.id))
        .await?;
    service
        .update(
            game.id,
            mistake.id,
            UpdateMatchEventParams {
                is_undone: Some(true),
                ..Default::default()
            },
        )
        .await?;

    let feed = service.play_by_play(game.id).await?;

    let ids: Vec<i32> = feed.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![steal.id, basket.id]);
    assert_eq!(feed[0].team_name.as_deref(), Some(team1.name.as_str()));
    assert_eq!(feed[0].period_label, "Q1");
    assert_eq!(feed[0].clock, "10:00");

    Ok(())
}

/// Tests the box score adds up the counted events per player and team.
///
/// Expected: scorer with 5 points, team total 5, assist credited
#[tokio::test]
async fn box_score_totals_player_stats() -> Result<(), AppError> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let (scorer, _) = factory::helpers::create_rostered_player(db, game.id, team1.id, true).await?;
    let (passer, _) = factory::helpers::create_rostered_player(db, game.id, team1.id, true).await?;
    let service = MatchEventService::new(db);

    let mut two = team_event(game.id, EventType::TwoPointMade, team1.id);
    two.player_id = Some(scorer.id);
    two.assist_player_id = Some(passer.id);
    service.create(two).await?;

    let mut three = team_event(game.id, EventType::ThreePointMade, team1.id);
    three.player_id = Some(scorer.id);
    service.create(three).await?;

    let box_score = service.box_score(game.id).await?;

    assert_eq!(box_score.team1.score, 5);
    assert_eq!(box_score.team1.totals.points, 5);
    let scorer_line = box_score
        .team1
        .players
        .iter()
        .find(|p| p.player_id == scorer.id)
        .unwrap();
    assert_eq!(scorer_line.stats.points, 5);
    assert_eq!(scorer_line.stats.three_pointers_made, 1);
    let passer_line = box_score
        .team1
        .players
        .iter()
        .find(|p| p.player_id == passer.id)
        .unwrap();
    assert_eq!(passer_line.stats.assists, 1);

    Ok(())
}
