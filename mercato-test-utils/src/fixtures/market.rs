//! Pool, team, and player fixture utilities.
//!
//! This module provides methods for seeding the market tables with test data:
//! pool players for squad assembly, teams in either readiness state, and owned
//! players both on and off the transfer list.

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::Utc;
use entity::sea_orm_active_enums::Position;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn market(&self) -> MarketFixtures<'_> {
        MarketFixtures { setup: self }
    }
}

// keeps pool external IDs unique across every fixture call in the process
static EXTERNAL_ID_SEQ: AtomicU32 = AtomicU32::new(1);

pub struct MarketFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> MarketFixtures<'a> {
    /// Insert mock pool players of one position.
    ///
    /// Market values rise by 100,000 per player in insertion order starting at
    /// 1,000,000, so tests can predict value-based rankings: the last player
    /// returned is always the most valuable of the batch.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Inserted pool players in insertion order
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_pool_position(
        &self,
        position: Position,
        count: usize,
    ) -> Result<Vec<entity::pool_player::Model>, TestError> {
        let mut inserted = Vec::with_capacity(count);

        for i in 0..count {
            let seq = EXTERNAL_ID_SEQ.fetch_add(1, Ordering::Relaxed);

            let model = entity::prelude::PoolPlayer::insert(entity::pool_player::ActiveModel {
                external_id: ActiveValue::Set(format!("pool-{}", seq)),
                name: ActiveValue::Set(format!("Prospect {}", seq)),
                position: ActiveValue::Set(position.clone()),
                age: ActiveValue::Set(19 + (i as i32 % 17)),
                country: ActiveValue::Set("Testland".to_string()),
                original_team: ActiveValue::Set("Free Agent".to_string()),
                market_value: ActiveValue::Set(1_000_000.0 + (i as f64) * 100_000.0),
                goals: ActiveValue::Set(i as i32),
                assists: ActiveValue::Set(0),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?;

            inserted.push(model);
        }

        Ok(inserted)
    }

    /// Insert a team that has finished squad assembly.
    pub async fn insert_ready_team(
        &self,
        user_id: i32,
        name: &str,
        budget: f64,
    ) -> Result<entity::team::Model, TestError> {
        self.insert_team(user_id, name, budget, true).await
    }

    /// Insert a team whose squad assembly has not finished.
    pub async fn insert_pending_team(
        &self,
        user_id: i32,
        name: &str,
        budget: f64,
    ) -> Result<entity::team::Model, TestError> {
        self.insert_team(user_id, name, budget, false).await
    }

    async fn insert_team(
        &self,
        user_id: i32,
        name: &str,
        budget: f64,
        is_ready: bool,
    ) -> Result<entity::team::Model, TestError> {
        Ok(entity::prelude::Team::insert(entity::team::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.to_string()),
            budget: ActiveValue::Set(budget),
            is_ready: ActiveValue::Set(is_ready),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert an owned player who is not on the transfer list.
    pub async fn insert_player(
        &self,
        team_id: i32,
        name: &str,
        position: Position,
        value: f64,
    ) -> Result<entity::player::Model, TestError> {
        self.insert_player_with_listing(team_id, name, position, value, None)
            .await
    }

    /// Insert an owned player already listed at `asking_price`.
    pub async fn insert_listed_player(
        &self,
        team_id: i32,
        name: &str,
        position: Position,
        value: f64,
        asking_price: f64,
    ) -> Result<entity::player::Model, TestError> {
        self.insert_player_with_listing(team_id, name, position, value, Some(asking_price))
            .await
    }

    async fn insert_player_with_listing(
        &self,
        team_id: i32,
        name: &str,
        position: Position,
        value: f64,
        asking_price: Option<f64>,
    ) -> Result<entity::player::Model, TestError> {
        Ok(entity::prelude::Player::insert(entity::player::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            name: ActiveValue::Set(name.to_string()),
            position: ActiveValue::Set(position),
            age: ActiveValue::Set(25),
            country: ActiveValue::Set("Testland".to_string()),
            value: ActiveValue::Set(value),
            goals: ActiveValue::Set(0),
            assists: ActiveValue::Set(0),
            is_starter: ActiveValue::Set(false),
            is_on_transfer_list: ActiveValue::Set(asking_price.is_some()),
            asking_price: ActiveValue::Set(asking_price),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Fill a team with `count` unlisted bench midfielders.
    ///
    /// Handy for putting a team at an exact squad size before exercising the
    /// size rules.
    pub async fn insert_squad(
        &self,
        team_id: i32,
        count: usize,
    ) -> Result<Vec<entity::player::Model>, TestError> {
        let mut inserted = Vec::with_capacity(count);

        for i in 0..count {
            inserted.push(
                self.insert_player(
                    team_id,
                    &format!("Squad Player {}", i + 1),
                    Position::Mid,
                    500_000.0,
                )
                .await?,
            );
        }

        Ok(inserted)
    }
}
