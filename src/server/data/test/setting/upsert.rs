use super::*;

/// Tests inserting a new key.
///
/// Expected: Ok(Setting) readable by key
#[tokio::test]
async fn inserts_new_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Setting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingRepository::new(db);
    repo.upsert("site_title".to_string(), "City League".to_string())
        .await?;

    let stored = repo.find_by_key("site_title").await?;

    assert_eq!(stored.map(|s| s.value), Some("City League".to_string()));

    Ok(())
}

/// Tests writing an existing key replaces its value instead of adding a row.
///
/// Expected: Ok(Setting) with the new value, one row in total
#[tokio::test]
async fn replaces_existing_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Setting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingRepository::new(db);
    repo.upsert("site_title".to_string(), "Old".to_string())
        .await?;
    let updated = repo
        .upsert("site_title".to_string(), "New".to_string())
        .await?;

    assert_eq!(updated.value, "New");
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
