use super::*;

/// Tests a correct email and password yield a token for that user.
///
/// Expected: Ok((User, token)) where the token resolves back to the user
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new(SECRET);

    let created = UserService::new(db)
        .create(editor("official@example.com", "correct horse"))
        .await?;

    let auth = AuthService::new(db, &jwt);
    let (user, token) = auth.login("official@example.com", "correct horse").await?;

    assert_eq!(user.id, created.id);
    assert_eq!(auth.user_from_token(&token).await?.id, created.id);

    Ok(())
}

/// Tests the login email is trimmed and matched case-insensitively.
///
/// Expected: Ok for `  Official@Example.COM `
#[tokio::test]
async fn normalizes_login_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new(SECRET);

    UserService::new(db)
        .create(editor("official@example.com", "correct horse"))
        .await?;

    let result = AuthService::new(db, &jwt)
        .login("  Official@Example.COM ", "correct horse")
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a wrong password and an unknown email fail the same way.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials_uniformly() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new(SECRET);

    UserService::new(db)
        .create(editor("official@example.com", "correct horse"))
        .await?;
    let auth = AuthService::new(db, &jwt);

    let wrong_password = auth.login("official@example.com", "battery staple").await;
    let unknown_email = auth.login("nobody@example.com", "correct horse").await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
