//! Team service layer.
//!
//! This module contains business logic services for team operations: status
//! polling while squad assembly runs, roster retrieval, and renames. The
//! assembly itself lives in [`squad`] because it runs on the worker, not in
//! request context.

pub mod squad;

use sea_orm::DatabaseConnection;

use crate::{
    model::team::{PlayerDto, TeamDto, TeamStatusDto, TeamWithPlayersDto},
    server::{
        data::team::TeamRepository,
        error::{team::TeamError, Error},
    },
};

/// Service for managing team operations.
pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    /// Creates a new instance of [`TeamService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reports whether a user's team is ready.
    ///
    /// A missing team is not an error here: it just means the assembly job
    /// has not created the row yet, so clients can poll this until
    /// `is_ready` flips.
    ///
    /// # Returns
    /// - `Ok(TeamStatusDto)` - Current readiness; `team_id` is `None` until
    ///   the team row exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_team_status(&self, user_id: i32) -> Result<TeamStatusDto, Error> {
        let team_repo = TeamRepository::new(self.db);

        let status = match team_repo.get_by_user_id(user_id).await? {
            Some(team) => TeamStatusDto {
                is_ready: team.is_ready,
                team_id: Some(team.id),
            },
            None => TeamStatusDto {
                is_ready: false,
                team_id: None,
            },
        };

        Ok(status)
    }

    /// Retrieves a user's team with its full roster.
    ///
    /// # Returns
    /// - `Ok(TeamWithPlayersDto)` - Team found, players in no particular order
    /// - `Err(Error::TeamError(TeamNotFound))` - User has no team yet
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_team_with_players(
        &self,
        user_id: i32,
    ) -> Result<TeamWithPlayersDto, Error> {
        let team_repo = TeamRepository::new(self.db);

        let (team, players) = team_repo
            .get_with_players(user_id)
            .await?
            .ok_or(TeamError::TeamNotFound)?;

        Ok(TeamWithPlayersDto {
            id: team.id,
            user_id: team.user_id,
            name: team.name,
            budget: team.budget,
            is_ready: team.is_ready,
            players: players.into_iter().map(PlayerDto::from).collect(),
        })
    }

    /// Renames a user's team.
    ///
    /// The name is trimmed before validation and storage, so names that are
    /// all whitespace are rejected the same as empty ones.
    ///
    /// # Returns
    /// - `Ok(TeamDto)` - Team with the new name applied
    /// - `Err(Error::TeamError(InvalidName))` - Name empty after trimming
    /// - `Err(Error::TeamError(TeamNotFound))` - User has no team
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn rename_team(&self, user_id: i32, name: &str) -> Result<TeamDto, Error> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TeamError::InvalidName.into());
        }

        let team_repo = TeamRepository::new(self.db);

        let team = team_repo
            .get_by_user_id(user_id)
            .await?
            .ok_or(TeamError::TeamNotFound)?;

        let renamed = team_repo.rename(team.id, trimmed).await?;

        Ok(TeamDto::from(renamed))
    }
}
