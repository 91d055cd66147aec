use std::sync::Arc;

use apalis::prelude::Data;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::{retry::ErrorRetryStrategy, Error},
    model::worker::WorkerJob,
    notify::NotificationSink,
    service::team::squad::SquadAssemblyService,
};

/// Entry point for jobs pulled off the Redis-backed queue.
///
/// Returning `Err` hands the job back to apalis for redelivery, so only
/// transient failures propagate. Permanent failures are logged and dropped
/// because replaying them cannot change the outcome.
pub async fn handle_job(
    job: WorkerJob,
    db: Data<DatabaseConnection>,
    notifier: Data<Arc<dyn NotificationSink>>,
    config: Data<Config>,
) -> Result<(), Error> {
    match job {
        WorkerJob::AssembleSquad {
            user_id,
            ref user_label,
        } => {
            tracing::debug!("Processing squad assembly for user_id: {}", user_id);

            let result = SquadAssemblyService::new(&db, notifier.as_ref())
                .assemble_squad(user_id, user_label, config.starting_budget)
                .await;

            if let Err(err) = result {
                match err.to_retry_strategy() {
                    ErrorRetryStrategy::Retry => {
                        tracing::error!(
                            "Squad assembly for user {} hit a transient failure, requeueing: {:?}",
                            user_id,
                            err
                        );
                        return Err(err);
                    }
                    ErrorRetryStrategy::Fail => {
                        tracing::error!(
                            "Squad assembly for user {} failed permanently: {:?}",
                            user_id,
                            err
                        );
                        return Ok(());
                    }
                }
            }

            tracing::debug!("Successfully assembled squad for user {}", user_id);
        }
    }

    Ok(())
}
