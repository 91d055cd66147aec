use sea_orm::entity::prelude::*;

/// A user's team, created asynchronously by squad assembly.
///
/// `is_ready` stays false until the full initial roster exists; `budget` is
/// mutated exclusively by the purchase transaction.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Owning user, issued by the external auth layer. One team per user.
    #[sea_orm(unique)]
    pub user_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub budget: f64,
    pub is_ready: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player::Entity")]
    Player,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
