use super::*;

/// Tests the league filter only returns that league's seasons.
///
/// Expected: Ok(Vec) with the two seasons of the first league
#[tokio::test]
async fn filters_by_league() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::league::create_league(db).await?;
    let other = factory::league::create_league(db).await?;
    let current = factory::season::create_season(db, league.id).await?;
    let past = factory::season::SeasonFactory::new(db, league.id)
        .name("2023-24")
        .is_active(false)
        .build()
        .await?;
    factory::season::create_season(db, other.id).await?;

    let repo = SeasonRepository::new(db);

    let mut ids: Vec<i32> = repo
        .get_all(Some(league.id))
        .await?
        .iter()
        .map(|s| s.id)
        .collect();
    ids.sort();
    assert_eq!(ids, vec![current.id, past.id]);

    assert_eq!(repo.get_all(None).await?.len(), 3);

    Ok(())
}
