use super::*;

/// Tests detecting a slug already used by another league.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_taken_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::League)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::league::LeagueFactory::new(db)
        .slug("premier")
        .build()
        .await?;

    let repo = LeagueRepository::new(db);
    assert!(repo.slug_exists("premier", None).await?);
    assert!(!repo.slug_exists("division-two", None).await?);

    Ok(())
}

/// Tests a league's own slug is ignored when excluded.
///
/// Updating a league without changing its slug must not count as a conflict.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_excluded_league() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::League)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::league::LeagueFactory::new(db)
        .slug("premier")
        .build()
        .await?;

    let taken = LeagueRepository::new(db)
        .slug_exists("premier", Some(league.id))
        .await?;

    assert!(!taken);

    Ok(())
}
