use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000002_create_league_table::League, m20250301_000003_create_season_table::Season,
    m20250301_000004_create_team_table::Team,
    m20250301_000007_create_game_rules_table::GameRules,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(pk_auto(Matches::Id))
                    .col(integer(Matches::Team1Id))
                    .col(integer(Matches::Team2Id))
                    .col(integer_null(Matches::LeagueId))
                    .col(integer_null(Matches::SeasonId))
                    .col(integer_null(Matches::GameRulesId))
                    .col(string_null(Matches::Venue))
                    .col(timestamp_with_time_zone(Matches::ScheduledAt))
                    .col(string(Matches::Status).default("UPCOMING"))
                    .col(integer(Matches::Team1Score).default(0))
                    .col(integer(Matches::Team2Score).default(0))
                    .col(integer(Matches::CurrentPeriod).default(0))
                    .col(integer(Matches::ClockSeconds).default(0))
                    .col(boolean(Matches::ClockRunning).default(false))
                    .col(integer(Matches::Team1Fouls).default(0))
                    .col(integer(Matches::Team2Fouls).default(0))
                    .col(integer(Matches::Team1Timeouts).default(0))
                    .col(integer(Matches::Team2Timeouts).default(0))
                    .col(integer_null(Matches::PossessionTeamId))
                    .col(integer(Matches::EventSequence).default(0))
                    .col(
                        timestamp_with_time_zone(Matches::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_team1_id")
                            .from(Matches::Table, Matches::Team1Id)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_team2_id")
                            .from(Matches::Table, Matches::Team2Id)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_league_id")
                            .from(Matches::Table, Matches::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_season_id")
                            .from(Matches::Table, Matches::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_game_rules_id")
                            .from(Matches::Table, Matches::GameRulesId)
                            .to(GameRules::Table, GameRules::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_matches_scheduled_at")
                    .table(Matches::Table)
                    .col(Matches::ScheduledAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Matches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Matches {
    Table,
    Id,
    Team1Id,
    Team2Id,
    LeagueId,
    SeasonId,
    GameRulesId,
    Venue,
    ScheduledAt,
    Status,
    Team1Score,
    Team2Score,
    CurrentPeriod,
    ClockSeconds,
    ClockRunning,
    Team1Fouls,
    Team2Fouls,
    Team1Timeouts,
    Team2Timeouts,
    PossessionTeamId,
    EventSequence,
    CreatedAt,
}
