use super::*;

/// Tests a partial update keeps the fields that were not provided.
///
/// Expected: Ok(League) with the new name and the original slug
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::League)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::league::LeagueFactory::new(db)
        .name("Old Name")
        .slug("old-name")
        .description(Some("Weekend league".to_string()))
        .build()
        .await?;

    let updated = LeagueRepository::new(db)
        .update(UpdateLeagueParams {
            id: league.id,
            name: Some("New Name".to_string()),
            slug: None,
            description: None,
        })
        .await?;

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.slug, "old-name");
    assert_eq!(updated.description, Some("Weekend league".to_string()));

    Ok(())
}

/// Tests an explicit null clears the description.
///
/// Expected: Ok(League) with description None
#[tokio::test]
async fn clears_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::League)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::league::LeagueFactory::new(db)
        .description(Some("To be removed".to_string()))
        .build()
        .await?;

    let updated = LeagueRepository::new(db)
        .update(UpdateLeagueParams {
            id: league.id,
            name: None,
            slug: None,
            description: Some(None),
        })
        .await?;

    assert_eq!(updated.description, None);

    Ok(())
}

/// Tests updating a missing league.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_league() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::League)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = LeagueRepository::new(db)
        .update(UpdateLeagueParams {
            id: 999,
            name: Some("Ghost".to_string()),
            slug: None,
            description: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
