//! League factory for creating test league entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test leagues.
pub struct LeagueFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    description: Option<String>,
}

impl<'a> LeagueFactory<'a> {
    /// Creates a new LeagueFactory with default values.
    ///
    /// Defaults:
    /// - name: `"League {id}"`
    /// - slug: `"league-{id}"`
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("League {}", id),
            slug: format!("league-{}", id),
            description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub async fn build(self) -> Result<entity::league::Model, DbErr> {
        entity::league::ActiveModel {
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a league with default values.
pub async fn create_league(db: &DatabaseConnection) -> Result<entity::league::Model, DbErr> {
    LeagueFactory::new(db).build().await
}
