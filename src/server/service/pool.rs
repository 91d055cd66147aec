//! Player pool service layer.

use sea_orm::DatabaseConnection;

use crate::{
    model::pool::PoolPlayerSeed,
    server::{data::pool::PoolPlayerRepository, error::Error},
};

/// Service for seeding and inspecting the global player pool.
///
/// The pool is the read-mostly catalog squad assembly draws from. Seeding is
/// idempotent on the upstream `external_id`, so periodic re-imports refresh
/// stats without growing the pool.
pub struct PoolService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PoolService<'a> {
    /// Creates a new instance of [`PoolService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a batch of scouted players and returns how many rows the batch
    /// touched.
    pub async fn seed(&self, entries: Vec<PoolPlayerSeed>) -> Result<usize, Error> {
        if entries.is_empty() {
            return Ok(0);
        }

        let pool_repo = PoolPlayerRepository::new(self.db);
        let seeded = pool_repo.upsert_many(entries).await?;

        Ok(seeded.len())
    }

    /// Total number of players in the pool.
    pub async fn size(&self) -> Result<u64, Error> {
        let pool_repo = PoolPlayerRepository::new(self.db);

        Ok(pool_repo.count().await?)
    }
}
