use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000004_create_team_table::Team, m20250301_000008_create_matches_table::Matches,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Timeout::Table)
                    .if_not_exists()
                    .col(pk_auto(Timeout::Id))
                    .col(integer(Timeout::MatchId))
                    .col(integer(Timeout::TeamId))
                    .col(string(Timeout::Kind).default("FULL"))
                    .col(integer(Timeout::Period))
                    .col(integer(Timeout::SecondsRemaining))
                    .col(
                        timestamp_with_time_zone(Timeout::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timeout_match_id")
                            .from(Timeout::Table, Timeout::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timeout_team_id")
                            .from(Timeout::Table, Timeout::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Timeout::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Timeout {
    Table,
    Id,
    MatchId,
    TeamId,
    Kind,
    Period,
    SecondsRemaining,
    CreatedAt,
}
