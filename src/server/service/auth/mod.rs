//! Authentication: credential checks, session tokens and password hashing.

pub mod jwt;
pub mod password;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::{jwt::JwtService, password::verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtService) -> Self {
        Self { db, jwt }
    }

    /// Checks an email and password and issues a session token.
    ///
    /// Unknown emails and wrong passwords produce the same error so the response
    /// does not reveal which accounts exist.
    ///
    /// # Arguments
    /// - `email` - Login email, matched case-insensitively
    /// - `password` - Plain text password
    ///
    /// # Returns
    /// - `Ok((User, String))` - Authenticated user and signed token
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError)` - Database or hashing failure
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), AppError> {
        let email = email.trim().to_lowercase();
        let user = UserRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            tracing::debug!("Failed login attempt for user {}", user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.jwt.create_token(
            user.id,
            user.email.clone(),
            user.role.as_str().to_string(),
        )?;

        tracing::info!("User {} logged in", user.id);

        Ok((user, token))
    }

    /// Resolves a session token to its user.
    ///
    /// # Returns
    /// - `Ok(User)` - Token valid and user still exists
    /// - `Err(AppError::AuthErr)` - Token invalid or expired, or user deleted
    pub async fn user_from_token(&self, token: &str) -> Result<User, AppError> {
        let claims = self.jwt.verify_token(token)?;
        let user_id = claims.user_id()?;

        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }
}
