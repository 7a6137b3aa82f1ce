use super::*;

fn seed() -> AdminSeed {
    AdminSeed {
        email: "Admin@Example.com".to_string(),
        password: "bootstrap-password".to_string(),
        name: "Administrator".to_string(),
    }
}

/// Tests the first run creates an admin with the normalized email.
///
/// Expected: Ok(Some(User)) with the admin role
#[tokio::test]
async fn creates_admin_on_first_run() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserService::new(db).seed_admin(&seed()).await?;

    let admin = created.unwrap();
    assert!(admin.is_admin());
    assert_eq!(admin.email, "admin@example.com");

    Ok(())
}

/// Tests later runs leave the existing account alone.
///
/// Expected: Ok(None), still one user
#[tokio::test]
async fn skips_existing_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    service.seed_admin(&seed()).await?;
    let second = service.seed_admin(&seed()).await?;

    assert!(second.is_none());
    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}
