use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// One in-memory SQLite database per test. Dropping the context drops the database.
pub struct TestContext {
    /// Set by `database()`; tests read it after `TestBuilder::build()`.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Connects on first use. Foreign keys are switched on so match deletes cascade to
    /// events, periods and rosters the way they do on Postgres.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;
                db.execute_unprepared("PRAGMA foreign_keys = ON").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Runs the CREATE TABLE statements in order.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
