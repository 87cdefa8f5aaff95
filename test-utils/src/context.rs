use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Per-test database handle.
///
/// Each context owns its own `sqlite::memory:` database, so tests never see each
/// other's rows. The connection is opened on first use.
pub struct TestContext {
    /// `None` until [`TestContext::database`] or [`TestContext::with_tables`] runs.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the in-memory connection, opening it if needed.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        let db = match self.db.take() {
            Some(db) => db,
            None => Database::connect("sqlite::memory:").await?,
        };

        Ok(self.db.insert(db))
    }

    /// Runs the given CREATE TABLE statements in order.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in &stmts {
            db.execute(stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
