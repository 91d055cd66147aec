use entity::sea_orm_active_enums::Position;
use serde::{Deserialize, Serialize};

use crate::model::team::PlayerDto;

/// Optional filters for browsing the transfer market.
///
/// Every field is independent; `None` leaves that dimension unfiltered. Name
/// filters match case-insensitive substrings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferFilters {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub position: Option<Position>,
    pub player_name: Option<String>,
    pub team_name: Option<String>,
}

/// One player on the transfer market, joined with their selling team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferListingDto {
    pub id: i32,
    pub name: String,
    pub position: Position,
    pub age: i32,
    pub country: String,
    pub value: f64,
    pub goals: i32,
    pub assists: i32,
    pub asking_price: Option<f64>,
    pub team_id: i32,
    pub team_name: String,
    /// True when the requesting user is the seller, so clients can disable
    /// the buy action on their own listings.
    pub own_listing: bool,
}

/// Outcome of a completed purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseReceiptDto {
    /// The player as they now exist on the buyer's team.
    pub player: PlayerDto,
    /// What the buyer paid and the seller received.
    pub transaction_price: f64,
    /// The buyer's budget after settlement.
    pub remaining_budget: f64,
}
