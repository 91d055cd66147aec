//! Transfer market service layer.
//!
//! This module implements the transfer market: owners list and unlist their
//! players, anyone browses the filtered market, and purchases settle player
//! ownership and both budgets atomically.

use sea_orm::{
    DatabaseConnection, DatabaseTransaction, DbBackend, DbErr, IsolationLevel, TransactionTrait,
};

use crate::{
    model::{
        team::PlayerDto,
        transfer::{PurchaseReceiptDto, TransferFilters, TransferListingDto},
    },
    server::{
        data::{player::PlayerRepository, team::TeamRepository},
        error::{transfer::TransferError, Error},
    },
};

/// Hard ceiling on squad size, checked on the buyer at purchase time.
const MAX_SQUAD_SIZE: u64 = 25;
/// A sale may not leave the seller at or below this many players.
const MIN_SQUAD_SIZE: u64 = 15;
/// Buyers pay this fraction of the asking price; sellers receive the same
/// amount, so no money is created or destroyed by a transfer.
const TRANSACTION_PRICE_FACTOR: f64 = 0.95;

/// Service for transfer market operations.
pub struct TransferService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransferService<'a> {
    /// Creates a new instance of [`TransferService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Puts one of the user's own players up for sale.
    ///
    /// # Returns
    /// - `Ok(PlayerDto)` - Player now listed at `asking_price`
    /// - `Err(Error::TransferError(PlayerNotFound))` - No such player
    /// - `Err(Error::TransferError(NotOwner))` - Player is on another user's team
    /// - `Err(Error::TransferError(InvalidPrice))` - Price not a positive finite number
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list_player(
        &self,
        user_id: i32,
        player_id: i32,
        asking_price: f64,
    ) -> Result<PlayerDto, Error> {
        let player_repo = PlayerRepository::new(self.db);

        let (player, team) = player_repo
            .get_with_team(player_id)
            .await?
            .ok_or(TransferError::PlayerNotFound)?;

        let team = team.ok_or_else(|| {
            Error::InternalError(format!("Player ID {} has no owning team row", player.id))
        })?;

        if team.user_id != user_id {
            return Err(TransferError::NotOwner.into());
        }

        if !asking_price.is_finite() || asking_price <= 0.0 {
            return Err(TransferError::InvalidPrice.into());
        }

        let listed = player_repo
            .set_listing(player.id, Some(asking_price))
            .await?;

        Ok(PlayerDto::from(listed))
    }

    /// Takes one of the user's own players off the market.
    ///
    /// Unlisting a player who was never listed is a no-op that still
    /// succeeds; the end state is the same.
    ///
    /// # Returns
    /// - `Ok(PlayerDto)` - Player no longer listed
    /// - `Err(Error::TransferError(PlayerNotFound))` - No such player
    /// - `Err(Error::TransferError(NotOwner))` - Player is on another user's team
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn unlist_player(&self, user_id: i32, player_id: i32) -> Result<PlayerDto, Error> {
        let player_repo = PlayerRepository::new(self.db);

        let (player, team) = player_repo
            .get_with_team(player_id)
            .await?
            .ok_or(TransferError::PlayerNotFound)?;

        let team = team.ok_or_else(|| {
            Error::InternalError(format!("Player ID {} has no owning team row", player.id))
        })?;

        if team.user_id != user_id {
            return Err(TransferError::NotOwner.into());
        }

        let unlisted = player_repo.set_listing(player.id, None).await?;

        Ok(PlayerDto::from(unlisted))
    }

    /// Browses the transfer market, cheapest listings first.
    ///
    /// Pass `requesting_user_id` to have the caller's own listings flagged
    /// via [`TransferListingDto::own_listing`]; anonymous browsing leaves the
    /// flag false everywhere.
    pub async fn market_listings(
        &self,
        filters: &TransferFilters,
        requesting_user_id: Option<i32>,
    ) -> Result<Vec<TransferListingDto>, Error> {
        let player_repo = PlayerRepository::new(self.db);

        let rows = player_repo.market_listings(filters).await?;

        rows.into_iter()
            .map(|(player, team)| {
                let team = team.ok_or_else(|| {
                    Error::InternalError(format!(
                        "Player ID {} has no owning team row",
                        player.id
                    ))
                })?;

                Ok(TransferListingDto {
                    id: player.id,
                    name: player.name,
                    position: player.position,
                    age: player.age,
                    country: player.country,
                    value: player.value,
                    goals: player.goals,
                    assists: player.assists,
                    asking_price: player.asking_price,
                    team_id: player.team_id,
                    team_name: team.name,
                    own_listing: requesting_user_id == Some(team.user_id),
                })
            })
            .collect()
    }

    /// Buys a listed player for 95% of the asking price.
    ///
    /// # Behavior
    /// - Validates in a fixed order so multi-violation attempts always fail
    ///   the same way: player exists, is for sale, is not the buyer's own,
    ///   buyer has a team with room (fewer than 25 players), buyer can afford
    ///   the price, and the sale leaves the seller at least 15 players
    /// - Settles atomically inside one serializable transaction: debit buyer,
    ///   credit seller with the identical amount, move the player to the
    ///   buyer's team, and clear the listing
    /// - The reassignment is guarded on the player still belonging to the
    ///   seller and still being listed; losing that race rolls the settlement
    ///   back and reports the player as no longer for sale
    ///
    /// # Returns
    /// - `Ok(PurchaseReceiptDto)` - Player moved, both budgets settled
    /// - `Err(Error::TransferError(PlayerNotFound))` - No such player
    /// - `Err(Error::TransferError(PlayerNotForSale))` - Not listed, or sold
    ///   to someone else first
    /// - `Err(Error::TransferError(CannotBuyOwnPlayer))` - Buyer already owns them
    /// - `Err(Error::TransferError(BuyerTeamNotFound))` - Buyer has no team
    /// - `Err(Error::TransferError(BuyerTeamFull))` - Buyer at 25 players
    /// - `Err(Error::TransferError(InsufficientFunds))` - Budget below the price
    /// - `Err(Error::TransferError(SellerTeamTooSmall))` - Seller at 15 players
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn buy_player(
        &self,
        buyer_user_id: i32,
        player_id: i32,
    ) -> Result<PurchaseReceiptDto, Error> {
        let txn = begin_serializable(self.db).await?;

        match Self::execute_purchase(&txn, buyer_user_id, player_id).await {
            Ok(receipt) => {
                txn.commit().await?;

                tracing::info!(
                    "Player {} sold to user {} for {}",
                    receipt.player.id,
                    buyer_user_id,
                    receipt.transaction_price
                );

                Ok(receipt)
            }
            Err(err) => {
                txn.rollback().await?;
                Err(err)
            }
        }
    }

    async fn execute_purchase(
        txn: &DatabaseTransaction,
        buyer_user_id: i32,
        player_id: i32,
    ) -> Result<PurchaseReceiptDto, Error> {
        let player_repo = PlayerRepository::new(txn);
        let team_repo = TeamRepository::new(txn);

        let (player, seller_team) = player_repo
            .get_with_team(player_id)
            .await?
            .ok_or(TransferError::PlayerNotFound)?;

        let seller_team = seller_team.ok_or_else(|| {
            Error::InternalError(format!("Player ID {} has no owning team row", player.id))
        })?;

        let asking_price = match player.asking_price {
            Some(price) if player.is_on_transfer_list => price,
            _ => return Err(TransferError::PlayerNotForSale.into()),
        };

        if seller_team.user_id == buyer_user_id {
            return Err(TransferError::CannotBuyOwnPlayer.into());
        }

        let buyer_team = team_repo
            .get_by_user_id(buyer_user_id)
            .await?
            .ok_or(TransferError::BuyerTeamNotFound)?;

        let buyer_squad_size = player_repo.count_by_team(buyer_team.id).await?;
        if buyer_squad_size >= MAX_SQUAD_SIZE {
            return Err(TransferError::BuyerTeamFull.into());
        }

        // buyer pays 95% of asking and the seller receives exactly that;
        // no fee is taken on either side
        let transaction_price = asking_price * TRANSACTION_PRICE_FACTOR;

        if buyer_team.budget < transaction_price {
            return Err(TransferError::InsufficientFunds.into());
        }

        let seller_squad_size = player_repo.count_by_team(seller_team.id).await?;
        if seller_squad_size <= MIN_SQUAD_SIZE {
            return Err(TransferError::SellerTeamTooSmall.into());
        }

        team_repo
            .adjust_budget(buyer_team.id, -transaction_price)
            .await?;
        team_repo
            .adjust_budget(seller_team.id, transaction_price)
            .await?;

        let reassigned = player_repo
            .reassign_owner(player.id, seller_team.id, buyer_team.id)
            .await?;

        // zero rows means a concurrent purchase took the player after our
        // read; the rollback above us undoes the budget writes
        if reassigned == 0 {
            return Err(TransferError::PlayerNotForSale.into());
        }

        let purchased = player_repo.get_by_id(player.id).await?.ok_or_else(|| {
            Error::InternalError(format!(
                "Player ID {} disappeared during purchase settlement",
                player.id
            ))
        })?;

        Ok(PurchaseReceiptDto {
            player: PlayerDto::from(purchased),
            transaction_price,
            remaining_budget: buyer_team.budget - transaction_price,
        })
    }
}

/// Purchases run serializable so concurrent buys of the same player
/// re-validate cleanly on retry. SQLite transactions are serializable
/// already and its driver rejects explicit isolation levels, so it begins
/// plain.
async fn begin_serializable(db: &DatabaseConnection) -> Result<DatabaseTransaction, DbErr> {
    match db.get_database_backend() {
        DbBackend::Sqlite => db.begin().await,
        _ => {
            db.begin_with_config(Some(IsolationLevel::Serializable), None)
                .await
        }
    }
}
