//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

use crate::server::service::auth::jwt::JwtService;

/// Shared resources cloned into every handler through Axum's state extraction.
///
/// `DatabaseConnection` is a pool handle and `JwtService` holds only the derived keys,
/// so clones share the same underlying resources.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// Signs and verifies the `auth-token` cookie.
    pub jwt: JwtService,

    /// Adds the `Secure` attribute to auth cookies, set in production.
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(db: DatabaseConnection, jwt: JwtService, secure_cookies: bool) -> Self {
        Self {
            db,
            jwt,
            secure_cookies,
        }
    }
}
