//! Team factory for creating test team entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams.
///
/// # Example
///
/// ```rust,ignore
/// let team = TeamFactory::new(&db)
///     .name("Harbour Hawks")
///     .short_name("HAW")
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    league_id: Option<i32>,
    name: String,
    short_name: String,
    logo_url: Option<String>,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {id}"`
    /// - short_name: `"T{id}"`
    /// - league_id, logo_url: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            league_id: None,
            name: format!("Team {}", id),
            short_name: format!("T{}", id),
            logo_url: None,
        }
    }

    pub fn league_id(mut self, league_id: Option<i32>) -> Self {
        self.league_id = league_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            league_id: ActiveValue::Set(self.league_id),
            name: ActiveValue::Set(self.name),
            short_name: ActiveValue::Set(self.short_name),
            logo_url: ActiveValue::Set(self.logo_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values, optionally in a league.
pub async fn create_team(
    db: &DatabaseConnection,
    league_id: Option<i32>,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).league_id(league_id).build().await
}
