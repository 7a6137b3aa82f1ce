use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000004_create_team_table::Team;

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
                    .col(integer_null(Player::TeamId))
                    .col(string(Player::FirstName))
                    .col(string(Player::LastName))
                    .col(integer_null(Player::JerseyNumber))
                    .col(string_null(Player::Position))
                    .col(
                        timestamp_with_time_zone(Player::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_team_id")
                            .from(Player::Table, Player::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    TeamId,
    FirstName,
    LastName,
    JerseyNumber,
    Position,
    CreatedAt,
}
