use super::*;

/// Tests sequence numbers start at 1 and increase by one per call.
///
/// Expected: Ok(1), Ok(2), Ok(3)
#[tokio::test]
async fn allocates_consecutive_numbers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, game) = factory::helpers::create_match_with_dependencies(db).await?;
    let repo = MatchRepository::new(db);

    assert_eq!(repo.next_sequence_number(game.id).await?, 1);
    assert_eq!(repo.next_sequence_number(game.id).await?, 2);
    assert_eq!(repo.next_sequence_number(game.id).await?, 3);

    Ok(())
}

/// Tests each match keeps its own counter.
///
/// Expected: Ok(1) for the second match after two allocations on the first
#[tokio::test]
async fn counters_are_per_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, first) = factory::helpers::create_match_with_dependencies(db).await?;
    let (_, _, second) = factory::helpers::create_match_with_dependencies(db).await?;
    let repo = MatchRepository::new(db);

    repo.next_sequence_number(first.id).await?;
    repo.next_sequence_number(first.id).await?;

    assert_eq!(repo.next_sequence_number(second.id).await?, 1);

    Ok(())
}

/// Tests allocating for a match that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MatchRepository::new(db).next_sequence_number(999).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
