use axum::http::{header, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    service::auth::jwt::JwtService,
};
use test_utils::{builder::TestBuilder, factory};

const SECRET: &str = "guard-test-secret";

fn cookie_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_str(&format!("auth-token={}", token)).unwrap(),
    );
    headers
}

fn token_for(jwt: &JwtService, user: &entity::user::Model) -> String {
    jwt.create_token(user.id, user.email.clone(), user.role.clone())
        .unwrap()
}

/// Tests admin user passes the admin permission check.
///
/// Expected: Ok(User) with the admin role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new(SECRET);

    let admin = factory::user::create_admin(db).await?;
    let headers = cookie_headers(&token_for(&jwt, &admin));

    let user = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.id, admin.id);
    assert!(user.is_admin());

    Ok(())
}

/// Tests an editor is denied the admin permission.
///
/// Expected: Err(AuthError::AccessDenied) naming the editor
#[tokio::test]
async fn denies_admin_permission_to_editor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new(SECRET);

    let editor = factory::user::create_user(db).await?;
    let headers = cookie_headers(&token_for(&jwt, &editor));

    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, editor.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other.err()),
    }

    Ok(())
}

/// Tests an empty permission list only requires a logged-in user.
///
/// Expected: Ok(User) for an editor
#[tokio::test]
async fn empty_permission_list_requires_login_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new(SECRET);

    let editor = factory::user::create_user(db).await?;
    let headers = cookie_headers(&token_for(&jwt, &editor));

    let user = AuthGuard::new(db, &jwt, &headers).require(&[]).await?;

    assert_eq!(user.email, editor.email);

    Ok(())
}

/// Tests a request without the auth cookie is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn denies_request_without_cookie() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new(SECRET);
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with another secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn denies_token_with_foreign_signature() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new(SECRET);

    let user = factory::user::create_user(db).await?;
    let forged = token_for(&JwtService::new("some-other-secret"), &user);
    let headers = cookie_headers(&forged);

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user was deleted is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_token_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtService::new(SECRET);

    let token = jwt
        .create_token(4242, "ghost@example.com".to_string(), "ADMIN".to_string())
        .unwrap();
    let headers = cookie_headers(&token);

    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(user_id))) => {
            assert_eq!(user_id, 4242)
        }
        other => panic!("Expected UserNotInDatabase, got: {:?}", other.err()),
    }

    Ok(())
}
