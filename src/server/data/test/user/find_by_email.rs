use super::*;

/// Tests looking a user up by email.
///
/// Expected: Ok(Some(User)) for a known address, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .email("coach@example.com")
        .role("ADMIN")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("coach@example.com").await?;

    assert_eq!(found.map(|u| u.id), Some(admin.id));
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}

/// Tests a stored role the application does not know.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("legacy@example.com")
        .role("SUPERUSER")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .find_by_email("legacy@example.com")
        .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
