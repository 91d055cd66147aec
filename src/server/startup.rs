use std::sync::Arc;

use apalis_redis::RedisStorage;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::{worker::WorkerError, Error},
    model::worker::WorkerJob,
    notify::NotificationSink,
    worker::handle_job,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect the job queue to Redis and spawn the squad assembly workers.
///
/// The returned storage handle is the producer side: clone it anywhere a
/// [`WorkerJob`] needs queueing. Workers run on the tokio runtime until the
/// process exits.
pub async fn start_workers(
    config: &Config,
    db: DatabaseConnection,
    notifier: Arc<dyn NotificationSink>,
) -> Result<RedisStorage<WorkerJob>, Error> {
    use apalis::prelude::*;

    let conn = apalis_redis::connect(config.redis_url.to_string())
        .await
        .map_err(|err| WorkerError::QueueConnection(err.to_string()))?;
    let storage = RedisStorage::new(conn);
    let workers = config.workers;

    let storage_clone = storage.clone();
    let config_clone = config.clone();

    let _ = tokio::spawn(async move {
        WorkerBuilder::new("mercato-worker")
            .concurrency(workers)
            .data(db)
            .data(notifier)
            .data(config_clone)
            .backend(storage_clone)
            .build_fn(handle_job)
            .run()
            .await;
    });

    Ok(storage)
}
