//! Auth cookie handling.
//!
//! The session is stateless: the signed token lives in the `auth-token` cookie and is
//! verified on every request by `AuthGuard`. This module only builds and reads the cookie.

use axum::http::{header, HeaderMap};

use crate::server::service::auth::jwt::TOKEN_LIFETIME_DAYS;

pub const AUTH_COOKIE: &str = "auth-token";

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

fn cookie(value: &str, max_age: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        AUTH_COOKIE, value, max_age
    );
    if secure {
        cookie.push_str("; Secure");
    }

    cookie
}

/// Builds the `Set-Cookie` value that stores a freshly issued token.
///
/// # Arguments
/// - `token` - Signed session token
/// - `secure` - Adds the `Secure` attribute, set in production
pub fn build_auth_cookie(token: &str, secure: bool) -> String {
    cookie(token, TOKEN_LIFETIME_DAYS * SECONDS_PER_DAY, secure)
}

/// Builds the `Set-Cookie` value that makes the browser drop the token.
pub fn build_clear_cookie(secure: bool) -> String {
    cookie("", 0, secure)
}

/// Reads the token from the request's `Cookie` headers.
///
/// # Returns
/// - `Some(token)` - The `auth-token` cookie is present and non-empty
/// - `None` - No such cookie
pub fn extract_auth_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == AUTH_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}
