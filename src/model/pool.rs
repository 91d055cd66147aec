use entity::sea_orm_active_enums::Position;
use serde::{Deserialize, Serialize};

/// One scouted player to seed into the pool.
///
/// `external_id` is the upstream data source's stable identifier; re-seeding
/// an id that already exists refreshes the player's stats instead of
/// inserting a duplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolPlayerSeed {
    pub external_id: String,
    pub name: String,
    pub position: Position,
    pub age: i32,
    pub country: String,
    pub original_team: String,
    pub market_value: f64,
    pub goals: i32,
    pub assists: i32,
}
