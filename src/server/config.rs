use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ADMIN_NAME: &str = "Administrator";

/// Deployment environment, selected with `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

/// Credentials for the bootstrap admin account created at startup.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
    pub name: String,
}

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub app_env: AppEnv,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub admin_seed: Option<AdminSeed>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let app_env = match lookup("APP_ENV").as_deref() {
            None | Some("") | Some("development") => AppEnv::Development,
            Some("production") => AppEnv::Production,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar("APP_ENV".to_string(), other.to_string()).into())
            }
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|value| {
                value
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| vec!["http://localhost:3000".to_string()]);

        let admin_seed = match (lookup("ADMIN_EMAIL"), lookup("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Some(AdminSeed {
                    email,
                    password,
                    name: lookup("ADMIN_NAME")
                        .filter(|name| !name.is_empty())
                        .unwrap_or_else(|| DEFAULT_ADMIN_NAME.to_string()),
                })
            }
            _ => None,
        };

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            jwt_secret: require("JWT_SECRET")?,
            app_env,
            port,
            allowed_origins,
            admin_seed,
        })
    }

    pub fn is_production(&self) -> bool {
        self.app_env == AppEnv::Production
    }
}
