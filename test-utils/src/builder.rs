use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Declares which tables a test needs, then creates them in a fresh SQLite database.
///
/// The presets (`with_league_tables`, `with_game_tables`, `with_news_tables`,
/// `with_content_tables`) add whole groups in foreign-key order.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{League, Team};
///
/// let test = TestBuilder::new()
///     .with_table(League)
///     .with_table(Team)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds one entity's table. Referenced tables must be added first.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the league hierarchy tables: League, Season, Team, Player.
    pub fn with_league_tables(self) -> Self {
        self.with_table(League)
            .with_table(Season)
            .with_table(Team)
            .with_table(Player)
    }

    /// Adds every table needed for match and game tracking operations.
    ///
    /// Includes the league hierarchy, GameRules, Match, and all per-match tables
    /// (roster, events, periods, timeouts, substitutions, jump balls).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_game_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_game_tables(self) -> Self {
        self.with_league_tables()
            .with_table(GameRules)
            .with_table(Match)
            .with_table(MatchPlayer)
            .with_table(MatchEvent)
            .with_table(MatchPeriod)
            .with_table(Timeout)
            .with_table(Substitution)
            .with_table(JumpBall)
    }

    /// Adds the tables needed for news and comment operations: User, NewsArticle, Comment.
    pub fn with_news_tables(self) -> Self {
        self.with_table(User)
            .with_table(NewsArticle)
            .with_table(Comment)
    }

    /// Adds the remaining content tables: User, Page, Media.
    pub fn with_content_tables(self) -> Self {
        self.with_table(User).with_table(Page).with_table(Media)
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
