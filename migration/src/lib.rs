pub use sea_orm_migration::prelude::*;

mod m20260115_000001_pool_player;
mod m20260115_000002_team;
mod m20260115_000003_player;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_pool_player::Migration),
            Box::new(m20260115_000002_team::Migration),
            Box::new(m20260115_000003_player::Migration),
        ]
    }
}
