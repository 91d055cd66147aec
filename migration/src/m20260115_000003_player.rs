use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000002_team::Team;

static IDX_PLAYER_TEAM_ID: &str = "idx-player-team_id";
static IDX_PLAYER_IS_ON_TRANSFER_LIST: &str = "idx-player-is_on_transfer_list";
static FK_PLAYER_TEAM_ID: &str = "fk-player-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(integer(Player::TeamId))
                    .col(string(Player::Name))
                    .col(string_len(Player::Position, 3))
                    .col(integer(Player::Age))
                    .col(string(Player::Country))
                    .col(double(Player::Value))
                    .col(integer(Player::Goals))
                    .col(integer(Player::Assists))
                    .col(boolean(Player::IsStarter))
                    .col(boolean(Player::IsOnTransferList))
                    .col(double_null(Player::AskingPrice))
                    .col(timestamp(Player::CreatedAt))
                    .col(timestamp(Player::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_TEAM_ID)
                    .table(Player::Table)
                    .col(Player::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_IS_ON_TRANSFER_LIST)
                    .table(Player::Table)
                    .col(Player::IsOnTransferList)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_TEAM_ID)
                    .from_tbl(Player::Table)
                    .from_col(Player::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAYER_TEAM_ID)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_IS_ON_TRANSFER_LIST)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_TEAM_ID)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    TeamId,
    Name,
    Position,
    Age,
    Country,
    Value,
    Goals,
    Assists,
    IsStarter,
    IsOnTransferList,
    AskingPrice,
    CreatedAt,
    UpdatedAt,
}
