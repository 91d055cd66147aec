//! Declarative test builder for test environment setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. The builder pattern allows chaining multiple configuration methods
//! together, with all operations queued and executed during the final `build()` call.

use entity::sea_orm_active_enums::Position;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// queued fixtures. Methods can be chained together and finalized with `build()` to
/// create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_market_tables: bool,

    // Database fixtures to insert
    pool_positions: Vec<(Position, usize)>, // (position, player count)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_market_tables: false,
            pool_positions: Vec::new(),
        }
    }

    /// Add the standard market tables to the test database.
    ///
    /// Creates all tables the pool, team, and transfer services touch:
    /// PoolPlayer, Team, and Player.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_market_tables(mut self) -> Self {
        self.include_market_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during
    /// `build()`. Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use entity::prelude::*;
    /// use mercato_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), mercato_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Team)
    ///     .with_table(Player)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock pool players of one position into the database.
    ///
    /// Queues `count` pool players to be inserted during `build()`, with unique
    /// external IDs and market values that rise with insertion order so tests can
    /// predict value-based rankings.
    ///
    /// # Arguments
    /// - `position` - Position for every player in this batch
    /// - `count` - How many players to insert
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_pool_players(mut self, position: Position, count: usize) -> Self {
        self.pool_positions.push((position, count));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (market tables if specified, then custom tables)
    /// 2. Inserts queued pool player fixtures
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_market_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::PoolPlayer),
                schema.create_table_from_entity(entity::prelude::Team),
                schema.create_table_from_entity(entity::prelude::Player),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures (using the fixture methods)
        for (position, count) in self.pool_positions {
            setup.market().insert_pool_position(position, count).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
