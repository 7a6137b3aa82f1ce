use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_league_table::League;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Season::Table)
                    .if_not_exists()
                    .col(pk_auto(Season::Id))
                    .col(integer(Season::LeagueId))
                    .col(string(Season::Name))
                    .col(date(Season::StartDate))
                    .col(date_null(Season::EndDate))
                    .col(boolean(Season::IsActive).default(false))
                    .col(
                        timestamp_with_time_zone(Season::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_season_league_id")
                            .from(Season::Table, Season::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Season::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Season {
    Table,
    Id,
    LeagueId,
    Name,
    StartDate,
    EndDate,
    IsActive,
    CreatedAt,
}
