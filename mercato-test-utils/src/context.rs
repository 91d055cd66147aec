//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder` for test execution.
//! The context wraps an in-memory SQLite database plus fixture helpers for seeding
//! pool players, teams, and squads.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// This struct is the result of calling `TestBuilder::build()` and provides access to
/// the test environment:
/// - Database connection with the requested tables created
/// - Fixture helpers via [`TestContext::market`]
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_market_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixture helpers
/// let team = test.market().insert_ready_team(1, "Team One", 5_000_000.0).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Create a new test context backed by a fresh in-memory SQLite database.
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Create database tables from schema statements.
    ///
    /// Executes CREATE TABLE statements for all provided table schemas. Used internally
    /// by TestBuilder to set up the database schema during test initialization.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
