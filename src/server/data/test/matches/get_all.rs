use super::*;

/// Tests matches are ordered by scheduled time.
///
/// Expected: Ok(Vec) earliest match first
#[tokio::test]
async fn orders_by_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team1 = factory::team::create_team(db, None).await?;
    let team2 = factory::team::create_team(db, None).await?;
    let later = factory::matches::MatchFactory::new(db, team1.id, team2.id)
        .scheduled_at(Utc::now() + Duration::days(7))
        .build()
        .await?;
    let sooner = factory::matches::MatchFactory::new(db, team2.id, team1.id)
        .scheduled_at(Utc::now() + Duration::days(1))
        .build()
        .await?;

    let matches = MatchRepository::new(db)
        .get_all(MatchFilter::default())
        .await?;

    let ids: Vec<i32> = matches.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![sooner.id, later.id]);

    Ok(())
}

/// Tests the team filter matches either side of a fixture.
///
/// Expected: Ok(Vec) with both matches the team plays in
#[tokio::test]
async fn filters_by_team_on_either_side() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::team::create_team(db, None).await?;
    let away = factory::team::create_team(db, None).await?;
    let bystander = factory::team::create_team(db, None).await?;
    factory::matches::create_match(db, home.id, away.id).await?;
    factory::matches::create_match(db, bystander.id, home.id).await?;
    factory::matches::create_match(db, away.id, bystander.id).await?;

    let matches = MatchRepository::new(db)
        .get_all(MatchFilter {
            team_id: Some(home.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|m| m.has_team(home.id)));

    Ok(())
}

/// Tests the status filter.
///
/// Expected: Ok(Vec) with only the live match
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_game_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_match_with_dependencies(db).await?;
    let (_, _, live) = factory::helpers::create_live_match(db).await?;

    let matches = MatchRepository::new(db)
        .get_all(MatchFilter {
            status: Some(MatchStatus::Live),
            ..Default::default()
        })
        .await?;

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, live.id);
    assert_eq!(matches[0].status, MatchStatus::Live);

    Ok(())
}
