use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Declares which tables a test needs before opening its database.
///
/// Tables are created from the SeaORM entities, so the test schema follows the entity
/// definitions rather than the migrations. Add referenced tables before the tables
/// pointing at them.
///
/// ```rust,ignore
/// let test = TestBuilder::new().with_reminder_tables().build().await?;
/// let db = test.db.as_ref().unwrap();
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// `bot_chat` and `reminder`, enough for anything the bot or scheduler touches.
    pub fn with_reminder_tables(self) -> Self {
        self.with_table(BotChat).with_table(Reminder)
    }

    pub fn with_all_tables(self) -> Self {
        self.with_table(User).with_reminder_tables()
    }

    /// Opens the in-memory database and creates the configured tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
