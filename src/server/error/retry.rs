use sea_orm::{DbErr, RuntimeErr};

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient infrastructure failure)
    Retry,
    /// Failed permanently (business rule or programming error)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => {
                match db_err {
                    // Connection acquisition errors - transient, should retry
                    DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                    // Connection errors - transient, should retry
                    DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                    // Serialization conflicts under SERIALIZABLE isolation and
                    // deadlocks roll the losing transaction back; a re-run
                    // re-validates against committed state and succeeds or
                    // fails cleanly.
                    _ if is_serialization_failure(db_err) => ErrorRetryStrategy::Retry,

                    // All other database errors are permanent failures:
                    // - Query errors (constraint violations, syntax errors, etc.)
                    // - Type conversion errors
                    // - Schema/migration errors
                    // - Record not found/inserted/updated
                    // These indicate programming bugs or data issues that won't resolve with retry
                    _ => ErrorRetryStrategy::Fail,
                }
            }

            // Worker queue errors - transient, could be Redis connection issues
            Self::WorkerError(_) => ErrorRetryStrategy::Retry,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Team errors - permanent failures (missing data, exhausted pool)
            Self::TeamError(_) => ErrorRetryStrategy::Fail,

            // Transfer errors - permanent failures (business rule violations)
            Self::TransferError(_) => ErrorRetryStrategy::Fail,

            // InternalError - permanent failures (internal error within mercato's code)
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}

/// Checks a database error for the Postgres serialization failure (40001) and
/// deadlock detected (40P01) SQLSTATE codes.
fn is_serialization_failure(db_err: &DbErr) -> bool {
    let runtime_err = match db_err {
        DbErr::Query(runtime_err) | DbErr::Exec(runtime_err) => runtime_err,
        _ => return false,
    };

    match runtime_err {
        RuntimeErr::SqlxError(sqlx_err) => sqlx_err
            .as_database_error()
            .and_then(|db_err| db_err.code())
            .is_some_and(|code| code == "40001" || code == "40P01"),
        _ => false,
    }
}
