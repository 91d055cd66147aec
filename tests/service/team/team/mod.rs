//! Tests for TeamService.

mod get_team_with_players;
