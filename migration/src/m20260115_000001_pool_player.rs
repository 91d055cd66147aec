use sea_orm_migration::{prelude::*, schema::*};

static IDX_POOL_PLAYER_POSITION: &str = "idx-pool_player-position";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PoolPlayer::Table)
                    .if_not_exists()
                    .col(pk_auto(PoolPlayer::Id))
                    .col(string_uniq(PoolPlayer::ExternalId))
                    .col(string(PoolPlayer::Name))
                    .col(string_len(PoolPlayer::Position, 3))
                    .col(integer(PoolPlayer::Age))
                    .col(string(PoolPlayer::Country))
                    .col(string(PoolPlayer::OriginalTeam))
                    .col(double(PoolPlayer::MarketValue))
                    .col(integer(PoolPlayer::Goals))
                    .col(integer(PoolPlayer::Assists))
                    .col(timestamp(PoolPlayer::CreatedAt))
                    .col(timestamp(PoolPlayer::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POOL_PLAYER_POSITION)
                    .table(PoolPlayer::Table)
                    .col(PoolPlayer::Position)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_POOL_PLAYER_POSITION)
                    .table(PoolPlayer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PoolPlayer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PoolPlayer {
    Table,
    Id,
    ExternalId,
    Name,
    Position,
    Age,
    Country,
    OriginalTeam,
    MarketValue,
    Goals,
    Assists,
    CreatedAt,
    UpdatedAt,
}
