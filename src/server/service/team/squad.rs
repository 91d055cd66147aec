//! Background squad assembly.
//!
//! Building a fresh 20-player squad means sampling the pool, copying players,
//! and flipping the team ready, which is too much work to hold a registration
//! request open for. Registration enqueues a [`WorkerJob::AssembleSquad`]
//! job and returns; the worker drives [`SquadAssemblyService`] with
//! at-least-once delivery, so the whole build is one transaction and safe to
//! re-run.

use apalis::prelude::Storage;
use apalis_redis::RedisStorage;
use entity::sea_orm_active_enums::Position;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::team::TeamStatusDto,
    server::{
        data::{player::PlayerRepository, pool::PoolPlayerRepository, team::TeamRepository},
        error::{team::TeamError, worker::WorkerError, Error},
        model::worker::WorkerJob,
        notify::NotificationSink,
    },
};

/// Positional quotas for a fresh squad as (position, players drafted,
/// starter slots). Totals 20 players with a 1-4-4-2 starting lineup.
const SQUAD_PLAN: [(Position, usize, usize); 4] = [
    (Position::Gk, 3, 1),
    (Position::Def, 6, 4),
    (Position::Mid, 6, 4),
    (Position::Att, 5, 2),
];

/// Queues squad assembly for a newly registered user.
///
/// Returns as soon as the job is durably in Redis; a worker picks it up and
/// builds the team in the background while the user polls their team status.
// We can't test this function because apalis requires an actual redis instance
// and doesn't yet have a proper sqlite implementation for testing purposes.
pub async fn create_team_async(
    worker_queue: &mut RedisStorage<WorkerJob>,
    user_id: i32,
    user_label: &str,
) -> Result<(), Error> {
    worker_queue
        .push(WorkerJob::AssembleSquad {
            user_id,
            user_label: user_label.to_string(),
        })
        .await
        .map_err(|err| WorkerError::Enqueue(err.to_string()))?;

    tracing::debug!("Queued squad assembly for user {}", user_id);

    Ok(())
}

/// Service that builds a user's initial squad from the player pool.
pub struct SquadAssemblyService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn NotificationSink,
}

impl<'a> SquadAssemblyService<'a> {
    /// Creates a new instance of [`SquadAssemblyService`]
    pub fn new(db: &'a DatabaseConnection, notifier: &'a dyn NotificationSink) -> Self {
        Self { db, notifier }
    }

    /// Builds the user's team and full squad, then notifies them it is ready.
    ///
    /// # Behavior
    /// - Creates the team named after `user_label` with `starting_budget`,
    ///   then drafts 3 GK / 6 DEF / 6 MID / 5 ATT uniformly at random from
    ///   the pool and marks the most valuable 1-4-4-2 as starters
    /// - Runs as a single transaction whose final write flips `is_ready`, so
    ///   a failure at any point leaves no partial team behind
    /// - Safe under duplicate delivery: an already-ready team short-circuits
    ///   to success, a leftover not-ready team is wiped and rebuilt, and two
    ///   concurrent builds collapse into one via the unique index on
    ///   `user_id`
    /// - Readiness is pushed through the notification sink best-effort after
    ///   commit; delivery failure is logged, never propagated
    ///
    /// # Returns
    /// - `Ok(())` - Team is ready (built now or by an earlier delivery)
    /// - `Err(Error::TeamError(PoolExhausted))` - Pool cannot fill a position
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn assemble_squad(
        &self,
        user_id: i32,
        user_label: &str,
        starting_budget: f64,
    ) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        match self
            .build_squad(&txn, user_id, user_label, starting_budget)
            .await
        {
            Ok(team_id) => {
                txn.commit().await?;
                self.notify_ready(user_id, team_id).await;
                Ok(())
            }
            Err(err) => {
                txn.rollback().await?;
                Err(err)
            }
        }
    }

    async fn build_squad(
        &self,
        txn: &DatabaseTransaction,
        user_id: i32,
        user_label: &str,
        starting_budget: f64,
    ) -> Result<i32, Error> {
        let team_repo = TeamRepository::new(txn);
        let player_repo = PlayerRepository::new(txn);

        let team = match team_repo.get_by_user_id(user_id).await? {
            // duplicate delivery of a finished job
            Some(team) if team.is_ready => {
                tracing::info!(
                    "Team {} for user {} is already ready, skipping assembly",
                    team.id,
                    user_id
                );
                return Ok(team.id);
            }
            // a previous attempt died mid-build; discard its partial roster
            Some(team) => {
                let deleted = player_repo.delete_by_team(team.id).await?;
                if deleted > 0 {
                    tracing::warn!(
                        "Discarded {} partial players for team {} before rebuilding",
                        deleted,
                        team.id
                    );
                }
                team
            }
            None => {
                team_repo
                    .create(user_id, &default_team_name(user_label), starting_budget)
                    .await?
            }
        };

        let pool_repo = PoolPlayerRepository::new(txn);
        let mut squad = Vec::new();

        for (position, sample_size, starter_slots) in SQUAD_PLAN {
            let sampled = pool_repo
                .sample_by_position(position.clone(), sample_size)
                .await?;

            if sampled.len() < sample_size {
                return Err(TeamError::PoolExhausted {
                    position,
                    wanted: sample_size,
                    found: sampled.len(),
                }
                .into());
            }

            squad.extend(mark_starters(sampled, starter_slots));
        }

        player_repo.insert_squad(team.id, &squad).await?;

        // the ready flip is the last write; nobody observes a ready team
        // without its full roster
        team_repo.set_ready(team.id).await?;

        tracing::info!(
            "Assembled squad of {} players for team {} (user {})",
            squad.len(),
            team.id,
            user_id
        );

        Ok(team.id)
    }

    /// Pushes readiness to the user, logging instead of failing on a dead
    /// channel.
    async fn notify_ready(&self, user_id: i32, team_id: i32) {
        let status = TeamStatusDto {
            is_ready: true,
            team_id: Some(team_id),
        };

        if let Err(err) = self.notifier.notify_team_status(user_id, &status).await {
            tracing::warn!("Could not push team readiness to user {}: {}", user_id, err);
        }
    }
}

/// Ranks one position's sample by market value, highest first, and marks the
/// top `starter_slots` as starters. The sort is stable, so equal values keep
/// their sample order.
fn mark_starters(
    mut sampled: Vec<entity::pool_player::Model>,
    starter_slots: usize,
) -> Vec<(entity::pool_player::Model, bool)> {
    sampled.sort_by(|a, b| b.market_value.total_cmp(&a.market_value));

    sampled
        .into_iter()
        .enumerate()
        .map(|(rank, pool_player)| (pool_player, rank < starter_slots))
        .collect()
}

/// Derives the default team name from the user's display label, keeping
/// everything before the first '@' so email addresses read as handles.
fn default_team_name(user_label: &str) -> String {
    let stem = user_label.split('@').next().unwrap_or(user_label);

    format!("Team {}", stem)
}
