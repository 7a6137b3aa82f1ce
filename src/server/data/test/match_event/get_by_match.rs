use super::*;

/// Tests events come back in sequence order regardless of insert order.
///
/// Expected: Ok(Vec) ordered 1, 2, 3
#[tokio::test]
async fn orders_by_sequence_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_live_match(db).await?;
    for sequence in [3, 1, 2] {
        factory::match_event::MatchEventFactory::new(db, game.id, "STEAL")
            .sequence_number(sequence)
            .build()
            .await?;
    }

    let events = MatchEventRepository::new(db)
        .get_by_match(game.id, MatchEventFilter::default())
        .await?;

    let sequences: Vec<i32> = events.iter().map(|e| e.sequence_number).collect();
    assert_eq!(sequences, vec![1, 2, 3]);

    Ok(())
}

/// Tests the period filter and the undone filter.
///
/// Expected: Ok(Vec) with only the counted period 2 event
#[tokio::test]
async fn filters_by_period_and_undone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    factory::match_event::MatchEventFactory::new(db, game.id, "TWO_POINT_MADE")
        .team_id(team1.id)
        .sequence_number(1)
        .build()
        .await?;
    factory::match_event::MatchEventFactory::new(db, game.id, "TWO_POINT_MADE")
        .team_id(team1.id)
        .period(2)
        .sequence_number(2)
        .build()
        .await?;
    factory::match_event::MatchEventFactory::new(db, game.id, "TWO_POINT_MADE")
        .team_id(team1.id)
        .period(2)
        .sequence_number(3)
        .is_undone(true)
        .build()
        .await?;

    let repo = MatchEventRepository::new(db);

    let period_two = repo
        .get_by_match(
            game.id,
            MatchEventFilter {
                period: Some(2),
                include_undone: true,
            },
        )
        .await?;
    assert_eq!(period_two.len(), 2);

    let counted = repo
        .get_by_match(
            game.id,
            MatchEventFilter {
                period: Some(2),
                include_undone: false,
            },
        )
        .await?;
    assert_eq!(counted.len(), 1);
    assert_eq!(counted[0].sequence_number, 2);
    assert_eq!(counted[0].event_type, EventType::TwoPointMade);

    Ok(())
}

/// Tests events of other matches are not returned.
///
/// Expected: Ok(Vec) with only the requested match's event
#[tokio::test]
async fn scopes_to_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let (other_team, _, other) = factory::helpers::create_live_match(db).await?;
    factory::match_event::create_match_event(db, game.id, team1.id, "BLOCK", 1).await?;
    factory::match_event::create_match_event(db, other.id, other_team.id, "STEAL", 1).await?;

    let events = MatchEventRepository::new(db)
        .get_by_match(game.id, MatchEventFilter::default())
        .await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, EventType::Block);

    Ok(())
}
