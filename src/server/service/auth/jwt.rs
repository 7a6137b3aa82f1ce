use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

/// Lifetime of an issued token and of the cookie carrying it.
pub const TOKEN_LIFETIME_DAYS: i64 = 7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    pub email: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(user_id: i32, email: String, role: String) -> Self {
        let now = Utc::now();
        let exp = now + Duration::days(TOKEN_LIFETIME_DAYS);

        Self {
            sub: user_id.to_string(),
            email,
            role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    /// Parses the subject back into a user ID.
    pub fn user_id(&self) -> Result<i32, AppError> {
        self.sub
            .parse::<i32>()
            .map_err(|e| AuthError::InvalidToken(format!("bad subject '{}': {}", self.sub, e)).into())
    }
}

/// Signs and verifies HS256 session tokens.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        let secret = secret.as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    pub fn create_token(&self, user_id: i32, email: String, role: String) -> Result<String, AppError> {
        let claims = Claims::new(user_id, email, role);
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))
    }

    /// Verifies signature and expiry.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AppError::AuthErr(InvalidToken))` - Tampered, expired or malformed token
    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(token_data.claims)
    }
}
