pub use super::player::Entity as Player;
pub use super::pool_player::Entity as PoolPlayer;
pub use super::team::Entity as Team;
