use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts backed by an in-memory SQLite database.
///
/// Either add entity tables one at a time with `with_table()`, or call
/// `with_schema()` to run every migration. Tests relying on composite unique
/// indexes or on post search need the migrated schema.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(Member)
///     .with_table(Habit)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Whether to run the migrator instead of creating tables from entities.
    migrate: bool,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity table to the test database.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Runs all migrations on build, producing the production schema.
    pub fn with_schema(mut self) -> Self {
        self.migrate = true;
        self
    }

    /// Connects to a fresh in-memory database and creates the configured schema.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the database ready
    /// - `Err(TestError::Database)` - Connecting, migrating or creating tables failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        if self.migrate {
            setup.with_migrations().await?;
        }

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
