use entity::sea_orm_active_enums::Position;
use serde::{Deserialize, Serialize};

/// Readiness of a user's team while squad assembly runs in the background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStatusDto {
    pub is_ready: bool,
    /// `None` until the assembly job has created the team row.
    pub team_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub budget: f64,
    pub is_ready: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDto {
    pub id: i32,
    pub team_id: i32,
    pub name: String,
    pub position: Position,
    pub age: i32,
    pub country: String,
    pub value: f64,
    pub goals: i32,
    pub assists: i32,
    pub is_starter: bool,
    pub is_on_transfer_list: bool,
    pub asking_price: Option<f64>,
}

/// A team together with its full roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamWithPlayersDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub budget: f64,
    pub is_ready: bool,
    pub players: Vec<PlayerDto>,
}

impl From<entity::team::Model> for TeamDto {
    fn from(team: entity::team::Model) -> Self {
        Self {
            id: team.id,
            user_id: team.user_id,
            name: team.name,
            budget: team.budget,
            is_ready: team.is_ready,
        }
    }
}

impl From<entity::player::Model> for PlayerDto {
    fn from(player: entity::player::Model) -> Self {
        Self {
            id: player.id,
            team_id: player.team_id,
            name: player.name,
            position: player.position,
            age: player.age,
            country: player.country,
            value: player.value,
            goals: player.goals,
            assists: player.assists,
            is_starter: player.is_starter,
            is_on_transfer_list: player.is_on_transfer_list,
            asking_price: player.asking_price,
        }
    }
}
