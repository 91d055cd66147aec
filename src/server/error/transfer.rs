//! Transfer market error types.
//!
//! Every variant corresponds to exactly one business rule checked by the
//! transfer service, in the order the purchase flow validates them. The
//! messages are user-facing; [`TransferError::code`] gives the stable
//! machine-readable form.

use thiserror::Error;

/// Errors from listing, unlisting, and purchasing players.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TransferError {
    /// The referenced player row does not exist.
    #[error("Player not found")]
    PlayerNotFound,
    /// The player belongs to another user's team.
    #[error("You can only manage your own players")]
    NotOwner,
    /// A listing was attempted with a non-positive or non-finite price.
    #[error("Asking price must be greater than 0")]
    InvalidPrice,
    /// The player is not currently on the transfer list.
    #[error("Player is not for sale")]
    PlayerNotForSale,
    /// The buyer already owns the listed player.
    #[error("Cannot buy your own player")]
    CannotBuyOwnPlayer,
    /// The buying user has no team to receive the player.
    #[error("Buyer team not found")]
    BuyerTeamNotFound,
    /// The buyer's squad is already at the size ceiling.
    #[error("Your team is full (max 25 players)")]
    BuyerTeamFull,
    /// The buyer's budget does not cover the transaction price.
    #[error("Insufficient funds")]
    InsufficientFunds,
    /// The sale would leave the seller below the squad size floor.
    #[error("Seller cannot sell players (minimum 15 required)")]
    SellerTeamTooSmall,
}

impl TransferError {
    /// Stable machine-readable code for transport layers to map.
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::PlayerNotFound => "PLAYER_NOT_FOUND",
            TransferError::NotOwner => "NOT_OWNER",
            TransferError::InvalidPrice => "INVALID_PRICE",
            TransferError::PlayerNotForSale => "PLAYER_NOT_FOR_SALE",
            TransferError::CannotBuyOwnPlayer => "CANNOT_BUY_OWN_PLAYER",
            TransferError::BuyerTeamNotFound => "BUYER_TEAM_NOT_FOUND",
            TransferError::BuyerTeamFull => "BUYER_TEAM_FULL",
            TransferError::InsufficientFunds => "INSUFFICIENT_FUNDS",
            TransferError::SellerTeamTooSmall => "SELLER_TEAM_TOO_SMALL",
        }
    }
}
