use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000008_create_matches_table::Matches;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatchPeriod::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchPeriod::Id))
                    .col(integer(MatchPeriod::MatchId))
                    .col(integer(MatchPeriod::Period))
                    .col(
                        timestamp_with_time_zone(MatchPeriod::StartedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(MatchPeriod::EndedAt))
                    .col(integer(MatchPeriod::Team1Score).default(0))
                    .col(integer(MatchPeriod::Team2Score).default(0))
                    .col(integer(MatchPeriod::Team1Fouls).default(0))
                    .col(integer(MatchPeriod::Team2Fouls).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_period_match_id")
                            .from(MatchPeriod::Table, MatchPeriod::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MatchPeriod::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MatchPeriod {
    Table,
    Id,
    MatchId,
    Period,
    StartedAt,
    EndedAt,
    Team1Score,
    Team2Score,
    Team1Fouls,
    Team2Fouls,
}
