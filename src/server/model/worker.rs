//! Worker job definitions for background task processing.
//!
//! This module defines the `WorkerJob` enum representing all types of background jobs
//! that can be dispatched to the worker queue. Jobs are serialized to JSON for Redis
//! storage and deserialized by worker handlers for processing with at-least-once
//! delivery, so every job body must be safe to re-run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Background job types for the mercato worker queue.
///
/// Each variant carries the minimal data needed to perform the task; anything else the
/// handler reads fresh from the database so redeliveries act on current state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum WorkerJob {
    /// Build the initial squad for a newly registered user.
    ///
    /// Creates the user's team and drafts their full 20-player squad from the player
    /// pool, flipping the team ready as the final step. Re-running is safe: a finished
    /// team short-circuits and a half-built one is rebuilt.
    ///
    /// # Fields
    /// - `user_id` - User to build a team for
    /// - `user_label` - Display label (typically the email address) the default team
    ///   name is derived from
    AssembleSquad {
        /// User to build a team for.
        user_id: i32,
        /// Display label the default team name is derived from.
        user_label: String,
    },
}

/// Condensed Display implementation for readable job logging.
///
/// Omits `user_label` since the user ID is what operators grep for.
impl fmt::Display for WorkerJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerJob::AssembleSquad { user_id, .. } => {
                write!(f, "AssembleSquad {{ user_id: {} }}", user_id)
            }
        }
    }
}
