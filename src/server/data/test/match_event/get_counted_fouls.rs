use super::*;

/// Tests all three foul types of the requested period are counted.
///
/// Undone fouls, fouls of other periods and non-foul events are left out.
///
/// Expected: Ok(Vec) with the personal, offensive and technical foul
#[tokio::test]
async fn counts_every_foul_type_in_period() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team1, _, game) = factory::helpers::create_live_match(db).await?;
    let seeds = [
        ("PERSONAL_FOUL", 1, false),
        ("OFFENSIVE_FOUL", 1, false),
        ("TECHNICAL_FOUL", 1, false),
        ("PERSONAL_FOUL", 1, true),
        ("PERSONAL_FOUL", 2, false),
        ("STEAL", 1, false),
    ];
    for (sequence, (event_type, period, undone)) in seeds.into_iter().enumerate() {
        factory::match_event::MatchEventFactory::new(db, game.id, event_type)
            .team_id(team1.id)
            .period(period)
            .sequence_number(sequence as i32 + 1)
            .is_undone(undone)
            .build()
            .await?;
    }

    let fouls = MatchEventRepository::new(db)
        .get_counted_fouls(game.id, 1)
        .await?;

    assert_eq!(fouls.len(), 3);
    assert!(fouls.iter().all(|e| e.event_type.is_foul()));

    Ok(())
}
