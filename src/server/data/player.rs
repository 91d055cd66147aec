use chrono::Utc;
use migration::{Expr, Func, IntoColumnRef, LikeExpr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::transfer::TransferFilters;

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new instance of [`PlayerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Fetches a player by ID
    pub async fn get_by_id(&self, player_id: i32) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await
    }

    /// Fetches a player joined with their owning team.
    pub async fn get_with_team(
        &self,
        player_id: i32,
    ) -> Result<Option<(entity::player::Model, Option<entity::team::Model>)>, DbErr> {
        entity::prelude::Player::find_by_id(player_id)
            .find_also_related(entity::prelude::Team)
            .one(self.db)
            .await
    }

    /// Counts the players on a team
    pub async fn count_by_team(&self, team_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::TeamId.eq(team_id))
            .count(self.db)
            .await
    }

    /// Copies pool players onto a team as owned players.
    ///
    /// Each entry pairs the pool player with their starter flag. Market value
    /// is frozen into `value` at copy time; later pool refreshes do not touch
    /// owned players.
    pub async fn insert_squad(
        &self,
        team_id: i32,
        squad: &[(entity::pool_player::Model, bool)],
    ) -> Result<(), DbErr> {
        let now = Utc::now().naive_utc();

        let players = squad.iter().map(|(pool_player, is_starter)| {
            entity::player::ActiveModel {
                team_id: ActiveValue::Set(team_id),
                name: ActiveValue::Set(pool_player.name.clone()),
                position: ActiveValue::Set(pool_player.position.clone()),
                age: ActiveValue::Set(pool_player.age),
                country: ActiveValue::Set(pool_player.country.clone()),
                value: ActiveValue::Set(pool_player.market_value),
                goals: ActiveValue::Set(pool_player.goals),
                assists: ActiveValue::Set(pool_player.assists),
                is_starter: ActiveValue::Set(*is_starter),
                is_on_transfer_list: ActiveValue::Set(false),
                asking_price: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            }
        });

        entity::prelude::Player::insert_many(players)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes every player on a team, returning how many rows went away.
    pub async fn delete_by_team(&self, team_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Player::delete_many()
            .filter(entity::player::Column::TeamId.eq(team_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Puts a player on the transfer list (`Some(price)`) or takes them off
    /// (`None`); both flags always move together.
    pub async fn set_listing(
        &self,
        player_id: i32,
        asking_price: Option<f64>,
    ) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            id: ActiveValue::Unchanged(player_id),
            is_on_transfer_list: ActiveValue::Set(asking_price.is_some()),
            asking_price: ActiveValue::Set(asking_price),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Moves a listed player to a new team and clears their listing, but only
    /// while they still belong to `from_team_id` and are still for sale.
    ///
    /// Returns the number of rows matched. Zero means a concurrent purchase
    /// won the player first; callers must treat that as "no longer for sale"
    /// and roll back anything already written.
    pub async fn reassign_owner(
        &self,
        player_id: i32,
        from_team_id: i32,
        to_team_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Player::update_many()
            .col_expr(entity::player::Column::TeamId, Expr::value(to_team_id))
            .col_expr(
                entity::player::Column::IsOnTransferList,
                Expr::value(false),
            )
            .col_expr(
                entity::player::Column::AskingPrice,
                Expr::value(Option::<f64>::None),
            )
            .col_expr(
                entity::player::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::player::Column::Id.eq(player_id))
            .filter(entity::player::Column::TeamId.eq(from_team_id))
            .filter(entity::player::Column::IsOnTransferList.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Fetches every listed player joined with their selling team, filtered
    /// and sorted for the market view.
    ///
    /// # Notes
    /// - Price bounds are inclusive on both ends
    /// - Name filters match case-insensitive substrings with LIKE wildcards
    ///   in the needle escaped
    /// - Results order by asking price ascending, then player ID for a stable
    ///   tie-break
    pub async fn market_listings(
        &self,
        filters: &TransferFilters,
    ) -> Result<Vec<(entity::player::Model, Option<entity::team::Model>)>, DbErr> {
        let mut query = entity::prelude::Player::find()
            .find_also_related(entity::prelude::Team)
            .filter(entity::player::Column::IsOnTransferList.eq(true));

        if let Some(min_price) = filters.min_price {
            query = query.filter(entity::player::Column::AskingPrice.gte(min_price));
        }
        if let Some(max_price) = filters.max_price {
            query = query.filter(entity::player::Column::AskingPrice.lte(max_price));
        }
        if let Some(position) = &filters.position {
            query = query.filter(entity::player::Column::Position.eq(position.clone()));
        }
        if let Some(player_name) = &filters.player_name {
            query = query.filter(contains_insensitive(
                (entity::player::Entity, entity::player::Column::Name),
                player_name,
            ));
        }
        if let Some(team_name) = &filters.team_name {
            query = query.filter(contains_insensitive(
                (entity::team::Entity, entity::team::Column::Name),
                team_name,
            ));
        }

        query
            .order_by_asc(entity::player::Column::AskingPrice)
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await
    }
}

/// Builds a case-insensitive substring match: `LOWER(col) LIKE '%needle%'`
/// with an explicit escape character so it behaves the same on every backend.
fn contains_insensitive<C>(col: C, needle: &str) -> SimpleExpr
where
    C: IntoColumnRef,
{
    let pattern = format!("%{}%", escape_like(needle).to_lowercase());

    Expr::expr(Func::lower(Expr::col(col))).like(LikeExpr::new(pattern).escape('\\'))
}

/// Escapes LIKE wildcards so user input only ever matches literally.
fn escape_like(needle: &str) -> String {
    needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
