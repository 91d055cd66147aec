//! Error types for the mercato server.
//!
//! This module provides the error handling system for the application, with specialized
//! error types per domain (team management, transfer market, configuration, worker queue).
//! Business-rule errors carry a stable machine-readable code for the transport layer to
//! map; infrastructure errors pass through transparently so callers can classify them
//! for retry via [`retry::ErrorRetryStrategy`]. All errors use `thiserror` for ergonomic
//! definitions with automatic `Display` and `Error` trait implementations.

pub mod config;
pub mod retry;
pub mod team;
pub mod transfer;
pub mod worker;

use thiserror::Error;

use crate::server::error::{
    config::ConfigError, team::TeamError, transfer::TransferError, worker::WorkerError,
};

/// Main error type for the mercato server.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// unified error type. Uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Team errors (missing teams, invalid names, exhausted player pool)
/// - Transfer errors (listing validation, purchase business rules)
/// - Worker queue errors (Redis connectivity, job enqueueing)
/// - Database errors (query failures, connection issues, constraint violations)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Team management error (missing team, invalid rename, pool exhausted).
    #[error(transparent)]
    TeamError(#[from] TeamError),
    /// Transfer market error (listing validation, purchase business rules).
    #[error(transparent)]
    TransferError(#[from] TransferError),
    /// Worker queue error (Redis connectivity, job enqueueing).
    #[error(transparent)]
    WorkerError(#[from] WorkerError),
    /// Internal error indicating a bug in mercato's code.
    ///
    /// This error should never occur in normal operation and indicates a programming
    /// error, such as a foreign key constraint not holding at read time.
    #[error("Internal error with mercato's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
