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
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(integer_null(Team::LeagueId))
                    .col(string(Team::Name))
                    .col(string(Team::ShortName))
                    .col(string_null(Team::LogoUrl))
                    .col(
                        timestamp_with_time_zone(Team::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_league_id")
                            .from(Team::Table, Team::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    LeagueId,
    Name,
    ShortName,
    LogoUrl,
    CreatedAt,
}
