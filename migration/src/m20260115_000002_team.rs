use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(integer_uniq(Team::UserId))
                    .col(string(Team::Name))
                    .col(double(Team::Budget))
                    .col(boolean(Team::IsReady))
                    .col(timestamp(Team::CreatedAt))
                    .col(timestamp(Team::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    UserId,
    Name,
    Budget,
    IsReady,
    CreatedAt,
    UpdatedAt,
}
