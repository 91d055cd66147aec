//! Tests for TeamService::get_team_with_players method.
//!
//! This module verifies roster retrieval, including returning the team with
//! every player on it and error handling for users without a team.

use mercato::server::{
    error::{team::TeamError, Error},
    service::team::TeamService,
};
use mercato_test_utils::prelude::*;

/// Tests retrieving a team and its roster.
///
/// Verifies that the service returns the team's own fields together with
/// every player on the team, and no players from other teams.
///
/// Expected: Ok with the team and its three players
#[tokio::test]
async fn returns_team_with_roster() -> Result<(), TestError> {
    let test = TestBuilder::new().with_market_tables().build().await?;
    let team = test
        .market()
        .insert_ready_team(1, "Team Jane", 5_000_000.0)
        .await?;
    test.market().insert_squad(team.id, 3).await?;

    let other_team = test
        .market()
        .insert_ready_team(2, "Team Rival", 5_000_000.0)
        .await?;
    test.market().insert_squad(other_team.id, 2).await?;

    let team_service = TeamService::new(&test.db);
    let result = team_service.get_team_with_players(1).await;

    assert!(result.is_ok());
    let roster = result.unwrap();
    assert_eq!(roster.id, team.id);
    assert_eq!(roster.name, "Team Jane");
    assert_eq!(roster.budget, 5_000_000.0);
    assert_eq!(roster.players.len(), 3);
    assert!(roster.players.iter().all(|player| player.team_id == team.id));

    Ok(())
}

/// Tests retrieving a team with no players yet.
///
/// Expected: Ok with an empty roster
#[tokio::test]
async fn returns_empty_roster_for_playerless_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_market_tables().build().await?;
    test.market()
        .insert_pending_team(1, "Team Jane", 5_000_000.0)
        .await?;

    let team_service = TeamService::new(&test.db);
    let result = team_service.get_team_with_players(1).await;

    assert!(result.is_ok());
    assert!(result.unwrap().players.is_empty());

    Ok(())
}

/// Tests retrieving the team of a user who has none.
///
/// Expected: Err with TeamNotFound
#[tokio::test]
async fn fails_for_user_without_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_market_tables().build().await?;

    let team_service = TeamService::new(&test.db);
    let result = team_service.get_team_with_players(1).await;

    assert!(matches!(
        result,
        Err(Error::TeamError(TeamError::TeamNotFound))
    ));

    Ok(())
}
