use sea_orm::DatabaseConnection;

use crate::server::{data::setting::SettingRepository, error::AppError, model::setting::Setting};

pub struct SettingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Setting>, AppError> {
        Ok(SettingRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, key: &str) -> Result<Setting, AppError> {
        SettingRepository::new(self.db)
            .find_by_key(key)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Setting '{}' not found", key)))
    }

    /// Stores a value under a key, creating the setting when it is new.
    pub async fn set(&self, key: &str, value: String) -> Result<Setting, AppError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::BadRequest("Setting key is required".to_string()));
        }

        Ok(SettingRepository::new(self.db)
            .upsert(key.to_string(), value)
            .await?)
    }

    pub async fn delete(&self, key: &str) -> Result<(), AppError> {
        if !SettingRepository::new(self.db).delete(key).await? {
            return Err(AppError::NotFound(format!("Setting '{}' not found", key)));
        }

        Ok(())
    }
}
