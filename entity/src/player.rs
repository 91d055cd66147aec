use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::Position;

/// A footballer owned by a team.
///
/// Created by copying a pool player at assembly time; `value` and the stat
/// columns are frozen at the copy and do not track later pool refreshes.
/// Exactly one team owns a player at any time; ownership is reassigned
/// atomically by the purchase transaction. `asking_price` is set iff
/// `is_on_transfer_list` is true.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub team_id: i32,
    pub name: String,
    pub position: Position,
    pub age: i32,
    pub country: String,
    #[sea_orm(column_type = "Double")]
    pub value: f64,
    pub goals: i32,
    pub assists: i32,
    /// One of the 11 first-team picks made at assembly; transfers never change it.
    pub is_starter: bool,
    pub is_on_transfer_list: bool,
    #[sea_orm(column_type = "Double", nullable)]
    pub asking_price: Option<f64>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id"
    )]
    Team,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
