pub mod prelude;

pub mod player;
pub mod pool_player;
pub mod sea_orm_active_enums;
pub mod team;
