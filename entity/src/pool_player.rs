use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Position;

/// Catalog entry for a footballer available to squad assembly.
///
/// Pool players are seeded from the external data provider and are never
/// owned by a team; assembly copies them into `player` rows instead.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pool_player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Identifier assigned by the upstream data provider, unique per player.
    #[sea_orm(unique)]
    pub external_id: String,
    pub name: String,
    pub position: Position,
    pub age: i32,
    pub country: String,
    /// Real-world club the player was imported from, "Free Agent" when unknown.
    pub original_team: String,
    #[sea_orm(column_type = "Double")]
    pub market_value: f64,
    pub goals: i32,
    pub assists: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
