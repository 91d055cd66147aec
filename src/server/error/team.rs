//! Team management error types.

use entity::sea_orm_active_enums::Position;
use thiserror::Error;

/// Errors from team lookups, renames, and squad assembly.
#[derive(Error, Debug, PartialEq)]
pub enum TeamError {
    /// No team exists for the requesting user.
    #[error("Team not found")]
    TeamNotFound,
    /// A rename was attempted with a name that is empty after trimming.
    #[error("Team name is required")]
    InvalidName,
    /// The player pool could not supply enough players of one position to
    /// build a full squad.
    #[error("Player pool exhausted for {position:?}: wanted {wanted}, found {found}")]
    PoolExhausted {
        /// Position that could not be filled.
        position: Position,
        /// How many players squad assembly asked for.
        wanted: usize,
        /// How many the pool actually held.
        found: usize,
    },
}

impl TeamError {
    /// Stable machine-readable code for transport layers to map.
    pub fn code(&self) -> &'static str {
        match self {
            TeamError::TeamNotFound => "TEAM_NOT_FOUND",
            TeamError::InvalidName => "INVALID_NAME",
            TeamError::PoolExhausted { .. } => "POOL_EXHAUSTED",
        }
    }
}
