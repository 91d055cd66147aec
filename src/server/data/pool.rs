use chrono::Utc;
use entity::sea_orm_active_enums::Position;
use migration::OnConflict;
use rand::seq::IndexedRandom;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect,
};

use crate::model::pool::PoolPlayerSeed;

pub struct PoolPlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PoolPlayerRepository<'a, C> {
    /// Creates a new instance of [`PoolPlayerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts pool players, refreshing stats for external IDs already present.
    ///
    /// # Notes
    /// - Conflicts on `external_id` update only the volatile stats (market value,
    ///   goals, assists); identity fields keep their first-seen values
    /// - Re-seeding the same batch is safe and leaves the pool size unchanged
    pub async fn upsert_many(
        &self,
        entries: Vec<PoolPlayerSeed>,
    ) -> Result<Vec<entity::pool_player::Model>, DbErr> {
        let pool_players = entries.into_iter().map(|entry| {
            entity::pool_player::ActiveModel {
                external_id: ActiveValue::Set(entry.external_id),
                name: ActiveValue::Set(entry.name),
                position: ActiveValue::Set(entry.position),
                age: ActiveValue::Set(entry.age),
                country: ActiveValue::Set(entry.country),
                original_team: ActiveValue::Set(entry.original_team),
                market_value: ActiveValue::Set(entry.market_value),
                goals: ActiveValue::Set(entry.goals),
                assists: ActiveValue::Set(entry.assists),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            }
        });

        entity::prelude::PoolPlayer::insert_many(pool_players)
            .on_conflict(
                OnConflict::column(entity::pool_player::Column::ExternalId)
                    .update_columns([
                        entity::pool_player::Column::MarketValue,
                        entity::pool_player::Column::Goals,
                        entity::pool_player::Column::Assists,
                        entity::pool_player::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Counts every player in the pool
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::PoolPlayer::find().count(self.db).await
    }

    /// Returns up to `count` pool players of one position, chosen uniformly
    /// at random without replacement.
    ///
    /// Candidate IDs are fetched and sampled in-process rather than leaning on
    /// database-specific random ordering, which keeps the uniformity contract
    /// independent of the backend.
    pub async fn sample_by_position(
        &self,
        position: Position,
        count: usize,
    ) -> Result<Vec<entity::pool_player::Model>, DbErr> {
        let candidate_ids: Vec<i32> = entity::prelude::PoolPlayer::find()
            .select_only()
            .column(entity::pool_player::Column::Id)
            .filter(entity::pool_player::Column::Position.eq(position))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        // rng handles are not Send, so sampling stays inside its own scope
        let sampled_ids: Vec<i32> = {
            let mut rng = rand::rng();
            candidate_ids
                .choose_multiple(&mut rng, count)
                .copied()
                .collect()
        };

        entity::prelude::PoolPlayer::find()
            .filter(entity::pool_player::Column::Id.is_in(sampled_ids))
            .all(self.db)
            .await
    }
}
