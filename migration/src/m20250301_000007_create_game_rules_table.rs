use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameRules::Table)
                    .if_not_exists()
                    .col(pk_auto(GameRules::Id))
                    .col(string(GameRules::Name))
                    .col(integer(GameRules::Periods).default(4))
                    .col(integer(GameRules::MinutesPerPeriod).default(10))
                    .col(integer(GameRules::OvertimeMinutes).default(5))
                    .col(integer(GameRules::HalftimeAfterPeriod).default(2))
                    .col(integer(GameRules::TeamFoulsForBonus).default(5))
                    .col(integer(GameRules::PersonalFoulLimit).default(5))
                    .col(integer(GameRules::TimeoutsPerTeam).default(5))
                    .col(boolean(GameRules::ResetTimeoutsEachPeriod).default(false))
                    .col(
                        timestamp_with_time_zone(GameRules::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameRules::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameRules {
    Table,
    Id,
    Name,
    Periods,
    MinutesPerPeriod,
    OvertimeMinutes,
    HalftimeAfterPeriod,
    TeamFoulsForBonus,
    PersonalFoulLimit,
    TimeoutsPerTeam,
    ResetTimeoutsEachPeriod,
    CreatedAt,
}
