//! Tests for PoolService::size method.
//!
//! This module verifies the pool size count, including counting across
//! positions, the empty pool, and error handling when required database
//! tables are missing.

use entity::sea_orm_active_enums::Position;
use mercato::server::{error::Error, service::pool::PoolService};
use mercato_test_utils::prelude::*;

/// Tests counting a populated pool.
///
/// Verifies that the size spans every position rather than any single one.
///
/// Expected: Ok(5)
#[tokio::test]
async fn counts_players_across_positions() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_market_tables()
        .with_pool_players(Position::Gk, 3)
        .with_pool_players(Position::Def, 2)
        .build()
        .await?;

    let pool_service = PoolService::new(&test.db);
    let result = pool_service.size().await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 5);

    Ok(())
}

/// Tests counting an empty pool.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_empty_pool() -> Result<(), TestError> {
    let test = TestBuilder::new().with_market_tables().build().await?;

    let pool_service = PoolService::new(&test.db);
    let result = pool_service.size().await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 0);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Verifies that the pool service returns a database error when counting
/// without the required database tables being created.
///
/// Expected: Err with DbErr
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let pool_service = PoolService::new(&test.db);
    let result = pool_service.size().await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
