//! Worker queue error types.
//!
//! This module defines errors related to the Redis-backed job queue. Worker errors
//! indicate infrastructure issues that prevent jobs from being properly enqueued or
//! processed, never business-rule failures.

use thiserror::Error;

/// Worker queue error type.
///
/// These errors occur while connecting to the queue backend or pushing jobs onto it.
/// Both are transient from the caller's perspective and safe to retry.
#[derive(Error, Debug)]
pub enum WorkerError {
    /// Failed to connect to the Redis instance backing the job queue.
    ///
    /// This error occurs at startup (or reconnect) when the Redis URL is unreachable
    /// or refuses the connection.
    #[error("Failed to connect to job queue: {0}")]
    QueueConnection(String),

    /// Failed to push a job onto the queue.
    ///
    /// This error occurs when the queue backend cannot accept a new job, typically
    /// due to Redis connection issues or serialization failures in the storage layer.
    #[error("Failed to enqueue job: {0}")]
    Enqueue(String),
}
