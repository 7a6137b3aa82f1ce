use super::*;

/// Tests the feed is newest first and skips undone events.
///
/// Expected: Ok(Vec) with sequences 3, 1
#[tokio::test]
async fn returns_counted_events_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_live_match(db).await?;
    factory::match_event::MatchEventFactory::new(db, game.id, "STEAL")
        .sequence_number(1)
        .build()
        .await?;
    factory::match_event::MatchEventFactory::new(db, game.id, "TURNOVER")
        .sequence_number(2)
        .is_undone(true)
        .build()
        .await?;
    factory::match_event::MatchEventFactory::new(db, game.id, "BLOCK")
        .sequence_number(3)
        .build()
        .await?;

    let events = MatchEventRepository::new(db)
        .get_play_by_play(game.id)
        .await?;

    let sequences: Vec<i32> = events.iter().map(|e| e.sequence_number).collect();
    assert_eq!(sequences, vec![3, 1]);

    Ok(())
}
