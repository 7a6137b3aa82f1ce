use super::*;

fn params(email: &str, password: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        name: "Scorekeeper".to_string(),
        password: password.to_string(),
        role: Role::Editor,
    }
}

/// Tests the stored password is a bcrypt hash of the given password.
///
/// Expected: Ok(User) whose hash verifies and differs from the plain text
#[tokio::test]
async fn stores_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserService::new(db)
        .create(params("keeper@example.com", "long enough"))
        .await?;

    assert_ne!(user.password_hash, "long enough");
    assert!(verify_password("long enough", &user.password_hash)?);

    Ok(())
}

/// Tests passwords shorter than eight characters are rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_short_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .create(params("keeper@example.com", "short"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a second account with a taken email is rejected before insert.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::create_user(db).await?;

    let result = UserService::new(db)
        .create(params(&existing.email, "long enough"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
