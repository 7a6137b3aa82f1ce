//! Season factory for creating test season entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test seasons within a league.
pub struct SeasonFactory<'a> {
    db: &'a DatabaseConnection,
    league_id: i32,
    name: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    is_active: bool,
}

impl<'a> SeasonFactory<'a> {
    /// Creates a new SeasonFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Season {id}"`
    /// - start_date: today
    /// - end_date: `None`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection, league_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            league_id,
            name: format!("Season {}", id),
            start_date: Utc::now().date_naive(),
            end_date: None,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn end_date(mut self, end_date: Option<NaiveDate>) -> Self {
        self.end_date = end_date;
        self
    }

    pub async fn build(self) -> Result<entity::season::Model, DbErr> {
        entity::season::ActiveModel {
            league_id: ActiveValue::Set(self.league_id),
            name: ActiveValue::Set(self.name),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active season for the league.
pub async fn create_season(
    db: &DatabaseConnection,
    league_id: i32,
) -> Result<entity::season::Model, DbErr> {
    SeasonFactory::new(db, league_id).build().await
}
