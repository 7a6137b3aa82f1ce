use super::*;

/// Tests creating a user stores the role.
///
/// Expected: Ok(User) with the editor role
#[tokio::test]
async fn creates_user_with_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(
            "scorer@example.com".to_string(),
            "Scorer".to_string(),
            "$2b$04$hash".to_string(),
            Role::Editor,
        )
        .await?;

    assert_eq!(user.email, "scorer@example.com");
    assert_eq!(user.role, Role::Editor);
    assert!(!user.is_admin());

    Ok(())
}

/// Tests a second account with the same email is rejected by the unique index.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::create_user(db).await?;

    let result = UserRepository::new(db)
        .create(
            existing.email.clone(),
            "Impostor".to_string(),
            "$2b$04$hash".to_string(),
            Role::Admin,
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
