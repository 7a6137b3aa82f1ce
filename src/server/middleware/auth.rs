use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::extract_auth_token,
    model::user::User,
    service::auth::{jwt::JwtService, AuthService},
};

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService, headers: &'a HeaderMap) -> Self {
        Self { db, jwt, headers }
    }

    /// Resolves the request's user and checks the listed permissions.
    ///
    /// An empty list only requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding every permission
    /// - `Err(AppError::AuthErr(_))` - No cookie, bad token, unknown user or missing role
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(token) = extract_auth_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let user = AuthService::new(self.db, self.jwt)
            .user_from_token(&token)
            .await?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Operation requires the admin role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
