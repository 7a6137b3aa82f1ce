use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::setting::Setting;

pub struct SettingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SettingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all settings ordered by key.
    pub async fn get_all(&self) -> Result<Vec<Setting>, DbErr> {
        let entities = entity::prelude::Setting::find()
            .order_by_asc(entity::setting::Column::Key)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Setting::from_entity).collect())
    }

    pub async fn find_by_key(&self, key: &str) -> Result<Option<Setting>, DbErr> {
        let entity = entity::prelude::Setting::find_by_id(key.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Setting::from_entity))
    }

    /// Inserts the setting or replaces the value of an existing key.
    ///
    /// # Returns
    /// - `Ok(Setting)` - The stored setting
    /// - `Err(DbErr)` - Database error
    pub async fn upsert(&self, key: String, value: String) -> Result<Setting, DbErr> {
        let entity = entity::prelude::Setting::insert(entity::setting::ActiveModel {
            key: ActiveValue::Set(key),
            value: ActiveValue::Set(value),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::setting::Column::Key)
                .update_columns([
                    entity::setting::Column::Value,
                    entity::setting::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Setting::from_entity(entity))
    }

    pub async fn delete(&self, key: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Setting::delete_by_id(key.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
