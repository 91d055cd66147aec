//! Tests for TransferService::buy_player method.
//!
//! This module verifies the purchase flow end to end: ownership transfer and
//! budget settlement at 95% of the asking price, every business rule in its
//! validation order, and transactional rollback so failed purchases never
//! move money or players.

use entity::sea_orm_active_enums::Position;
use mercato::server::{
    error::{transfer::TransferError, Error},
    service::transfer::TransferService,
};
use mercato_test_utils::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

const SELLER_USER: i32 = 1;
const BUYER_USER: i32 = 2;

/// Builds the standard purchase scenario: a seller with a 15-player squad
/// plus one listed striker, and a buyer with a 15-player squad.
async fn listed_player_scenario(
    test: &TestContext,
    seller_budget: f64,
    buyer_budget: f64,
    asking_price: f64,
) -> Result<(entity::team::Model, entity::team::Model, entity::player::Model), TestError> {
    let seller = test
        .market()
        .insert_ready_team(SELLER_USER, "Sellers FC", seller_budget)
        .await?;
    test.market().insert_squad(seller.id, 15).await?;
    let listed = test
        .market()
        .insert_listed_player(seller.id, "Star Striker", Position::Att, 2_500_000.0, asking_price)
        .await?;

    let buyer = test
        .market()
        .insert_ready_team(BUYER_USER, "Buyers FC", buyer_budget)
        .await?;
    test.market().insert_squad(buyer.id, 15).await?;

    Ok((seller, buyer, listed))
}

async fn team_budget(test: &TestContext, team_id: i32) -> Result<f64, TestError> {
    Ok(entity::prelude::Team::find_by_id(team_id)
        .one(&test.db)
        .await?
        .expect("Team should exist")
        .budget)
}

async fn squad_size(test: &TestContext, team_id: i32) -> Result<u64, TestError> {
    Ok(entity::prelude::Player::find()
        .filter(entity::player::Column::TeamId.eq(team_id))
        .count(&test.db)
        .await?)
}

/// Tests a successful purchase.
///
/// Verifies the full settlement: the buyer pays 95% of the asking price, the
/// seller receives exactly the same amount, the player moves to the buyer's
/// team with the listing cleared, and no money is created or destroyed.
///
/// Expected: Ok with the player transferred and both budgets settled
#[tokio::test]
async fn transfers_player_and_settles_budgets() -> Result<(), TestError> {
    let test = TestBuilder::new().with_market_tables().build().await?;
    let (seller, buyer, listed) =
        listed_player_scenario(&test, 3_000_000.0, 20_000_000.0, 2_000_000.0).await?;

    let transfer_service = TransferService::new(&test.db);
    let result = transfer_service.buy_player(BUYER_USER, listed.id).await;

    assert!(result.is_ok());
    let receipt = result.unwrap();
    assert_eq!(receipt.transaction_price, 1_900_000.0);
    assert_eq!(receipt.remaining_budget, 18_100_000.0);
    assert_eq!(receipt.player.id, listed.id);
    assert_eq!(receipt.player.team_id, buyer.id);
    assert!(!receipt.player.is_on_transfer_list);
    assert_eq!(receipt.player.asking_price, None);

    let buyer_budget = team_budget(&test, buyer.id).await?;
    let seller_budget = team_budget(&test, seller.id).await?;
    assert_eq!(buyer_budget, 18_100_000.0);
    assert_eq!(seller_budget, 4_900_000.0);
    assert_eq!(buyer_budget + seller_budget, 23_000_000.0);

    assert_eq!(squad_size(&test, buyer.id).await?, 16);
    assert_eq!(squad_size(&test, seller.id).await?, 15);

    Ok(())
}

/// Tests a purchase that consumes the buyer's whole budget.
///
/// Verifies that a budget exactly equal to the transaction price is enough.
///
/// Expected: Ok with a remaining budget of zero
#[tokio::test]
async fn succeeds_with_exact_budget() -> Result<(), TestError> {
    let test = TestBuilder::new().with_market_tables().build().await?;
    let (_, _, listed) =
        listed_player_scenario(&test, 3_000_000.0, 950_000.0, 1_000_000.0).await?;

    let transfer_service = TransferService::new(&test.db);
    let result = transfer_service.buy_player(BUYER_USER, listed.id).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().remaining_budget, 0.0);

    Ok(())
}

/// Tests buying a player who does not exist.
///
/// Expected: Err with PlayerNotFound
#[tokio::test]
async fn fails_for_missing_player() -> Result<(), TestError> {
    let test = TestBuilder::new().with_market_tables().build().await?;
    test.market()
        .insert_ready_team(BUYER_USER, "Buyers FC", 20_000_000.0)
        .await?;

    let transfer_service = TransferService::new(&test.db);
    let result = transfer_service.buy_player(BUYER_USER, 999).await;

    assert!(matches!(
        result,
        Err(Error::TransferError(TransferError::PlayerNotFound))
    ));

    Ok(())
}

/// Tests buying a player who is not on the market.
///
/// Expected: Err with PlayerNotForSale and both budgets untouched
#[tokio::test]
async fn fails_for_unlisted_player() -> Result<(), TestError> {
    let test = TestBuilder::new().with_market_tables().build().await?;
    let seller = test
        .market()
        .insert_ready_team(SELLER_USER, "Sellers FC", 3_000_000.0)
        .await?;
    let player = test
        .market()
        .insert_player(seller.id, "Not For Sale", Position::Att, 2_500_000.0)
        .await?;
    let buyer = test
        .market()
        .insert_ready_team(BUYER_USER, "Buyers FC", 20_000_000.0)
        .await?;

    let transfer_service = TransferService::new(&test.db);
    let result = transfer_service.buy_player(BUYER_USER, player.id).await;

    assert!(matches!(
        result,
        Err(Error::TransferError(TransferError::PlayerNotForSale))
    ));
    assert_eq!(team_budget(&test, seller.id).await?, 3_000_000.0);
    assert_eq!(team_budget(&test, buyer.id).await?, 20_000_000.0);

    Ok(())
}

/// Tests the validation order for an unlisted player the buyer owns.
///
/// Verifies that the listing check runs before the self-purchase check.
///
/// Expected: Err with PlayerNotForSale
#[tokio::test]
async fn checks_listing_before_self_purchase() -> Result<(), TestError> {
    let test = TestBuilder::new().with_market_tables().build().await?;
    let team = test
        .market()
        .insert_ready_team(BUYER_USER, "Buyers FC", 20_000_000.0)
        .await?;
    let player = test
        .market()
        .insert_player(team.id, "My Own Player", Position::Att, 2_500_000.0)
        .await?;

    let transfer_service = TransferService::new(&test.db);
    let result = transfer_service.buy_player(BUYER_USER, player.id).await;

    assert!(matches!(
        result,
        Err(Error::TransferError(TransferError::PlayerNotForSale))
    ));

    Ok(())
}

/// Tests buying one's own listed player.
///
/// The owner has no budget at all, which verifies that the self-purchase
/// check runs before any funds check.
///
/// Expected: Err with CannotBuyOwnPlayer
#[tokio::test]
async fn fails_for_own_player() -> Result<(), TestError> {
    let test = TestBuilder::new().with_market_tables().build().await?;
    let team = test
        .market()
        .insert_ready_team(SELLER_USER, "Sellers FC", 0.0)
        .await?;
    let listed = test
        .market()
        .insert_listed_player(team.id, "Star Striker", Position::Att, 2_500_000.0, 2_000_000.0)
        .await?;

    let transfer_service = TransferService::new(&test.db);
    let result = transfer_service.buy_player(SELLER_USER, listed.id).await;

    assert!(matches!(
        result,
        Err(Error::TransferError(TransferError::CannotBuyOwnPlayer))
    ));

    Ok(())
}

/// Tests buying without having a team.
///
/// Expected: Err with BuyerTeamNotFound
#[tokio::test]
async fn fails_for_buyer_without_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_market_tables().build().await?;
    let seller = test
        .market()
        .insert_ready_team(SELLER_USER, "Sellers FC", 3_000_000.0)
        .await?;
    let listed = test
        .market()
        .insert_listed_player(seller.id, "Star Striker", Position::Att, 2_500_000.0, 2_000_000.0)
        .await?;

    let transfer_service = TransferService::new(&test.db);
    let result = transfer_service.buy_player(99, listed.id).await;

    assert!(matches!(
        result,
        Err(Error::TransferError(TransferError::BuyerTeamNotFound))
    ));

    Ok(())
}

/// Tests buying with a squad already at the 25-player ceiling.
///
/// The buyer also has no budget, which verifies that the squad size check
/// runs before the funds check.
///
/// Expected: Err with BuyerTeamFull and the player still with the seller
#[tokio::test]
async fn fails_for_full_buyer_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_market_tables().build().await?;
    let seller = test
        .market()
        .insert_ready_team(SELLER_USER, "Sellers FC", 3_000_000.0)
        .await?;
    test.market().insert_squad(seller.id, 15).await?;
    let listed = test
        .market()
        .insert_listed_player(seller.id, "Star Striker", Position::Att, 2_500_000.0, 2_000_000.0)
        .await?;
    let buyer = test
        .market()
        .insert_ready_team(BUYER_USER, "Buyers FC", 0.0)
        .await?;
    test.market().insert_squad(buyer.id, 25).await?;

    let transfer_service = TransferService::new(&test.db);
    let result = transfer_service.buy_player(BUYER_USER, listed.id).await;

    assert!(matches!(
        result,
        Err(Error::TransferError(TransferError::BuyerTeamFull))
    ));

    let db_player = entity::prelude::Player::find_by_id(listed.id)
        .one(&test.db)
        .await?
        .expect("Player should exist");
    assert_eq!(db_player.team_id, seller.id);
    assert!(db_player.is_on_transfer_list);

    Ok(())
}

/// Tests buying beyond the buyer's means.
///
/// Expected: Err with InsufficientFunds and both budgets untouched
#[tokio::test]
async fn fails_for_insufficient_funds() -> Result<(), TestError> {
    let test = TestBuilder::new().with_market_tables().build().await?;
    let (seller, buyer, listed) =
        listed_player_scenario(&test, 3_000_000.0, 1_000_000.0, 10_000_000.0).await?;

    let transfer_service = TransferService::new(&test.db);
    let result = transfer_service.buy_player(BUYER_USER, listed.id).await;

    assert!(matches!(
        result,
        Err(Error::TransferError(TransferError::InsufficientFunds))
    ));
    assert_eq!(team_budget(&test, seller.id).await?, 3_000_000.0);
    assert_eq!(team_budget(&test, buyer.id).await?, 1_000_000.0);

    Ok(())
}

/// Tests the validation order for a poor buyer and a minimum-size seller.
///
/// Verifies that the funds check runs before the seller squad size check.
///
/// Expected: Err with InsufficientFunds
#[tokio::test]
async fn checks_funds_before_seller_size() -> Result<(), TestError> {
    let test = TestBuilder::new().with_market_tables().build().await?;
    let seller = test
        .market()
        .insert_ready_team(SELLER_USER, "Sellers FC", 3_000_000.0)
        .await?;
    test.market().insert_squad(seller.id, 14).await?;
    let listed = test
        .market()
        .insert_listed_player(seller.id, "Star Striker", Position::Att, 2_500_000.0, 2_000_000.0)
        .await?;
    test.market()
        .insert_ready_team(BUYER_USER, "Buyers FC", 0.0)
        .await?;

    let transfer_service = TransferService::new(&test.db);
    let result = transfer_service.buy_player(BUYER_USER, listed.id).await;

    assert!(matches!(
        result,
        Err(Error::TransferError(TransferError::InsufficientFunds))
    ));

    Ok(())
}

/// Tests buying from a seller at the 15-player floor.
///
/// A seller with 15 players total may not sell; the sale would drop them
/// below a fieldable squad.
///
/// Expected: Err with SellerTeamTooSmall and the listing still live
#[tokio::test]
async fn fails_when_seller_at_minimum() -> Result<(), TestError> {
    let test = TestBuilder::new().with_market_tables().build().await?;
    let seller = test
        .market()
        .insert_ready_team(SELLER_USER, "Sellers FC", 3_000_000.0)
        .await?;
    test.market().insert_squad(seller.id, 14).await?;
    let listed = test
        .market()
        .insert_listed_player(seller.id, "Star Striker", Position::Att, 2_500_000.0, 2_000_000.0)
        .await?;
    let buyer = test
        .market()
        .insert_ready_team(BUYER_USER, "Buyers FC", 20_000_000.0)
        .await?;

    let transfer_service = TransferService::new(&test.db);
    let result = transfer_service.buy_player(BUYER_USER, listed.id).await;

    assert!(matches!(
        result,
        Err(Error::TransferError(TransferError::SellerTeamTooSmall))
    ));

    let db_player = entity::prelude::Player::find_by_id(listed.id)
        .one(&test.db)
        .await?
        .expect("Player should exist");
    assert_eq!(db_player.team_id, seller.id);
    assert!(db_player.is_on_transfer_list);
    assert_eq!(team_budget(&test, buyer.id).await?, 20_000_000.0);

    Ok(())
}

/// Tests buying a player who was just sold to someone else.
///
/// Verifies that the first purchase clears the listing, so a second buyer
/// sees the player as no longer for sale.
///
/// Expected: Ok for the first buyer, Err with PlayerNotForSale for the second
#[tokio::test]
async fn fails_when_player_already_sold() -> Result<(), TestError> {
    let test = TestBuilder::new().with_market_tables().build().await?;
    let (_, _, listed) =
        listed_player_scenario(&test, 3_000_000.0, 20_000_000.0, 2_000_000.0).await?;
    test.market()
        .insert_ready_team(3, "Latecomers FC", 20_000_000.0)
        .await?;

    let transfer_service = TransferService::new(&test.db);
    transfer_service.buy_player(BUYER_USER, listed.id).await.unwrap();
    let result = transfer_service.buy_player(3, listed.id).await;

    assert!(matches!(
        result,
        Err(Error::TransferError(TransferError::PlayerNotForSale))
    ));

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err with DbErr
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let transfer_service = TransferService::new(&test.db);
    let result = transfer_service.buy_player(BUYER_USER, 1).await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
