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
                    .table(JumpBall::Table)
                    .if_not_exists()
                    .col(pk_auto(JumpBall::Id))
                    .col(integer(JumpBall::MatchId))
                    .col(integer_null(JumpBall::Team1PlayerId))
                    .col(integer_null(JumpBall::Team2PlayerId))
                    .col(integer(JumpBall::WinnerTeamId))
                    .col(integer(JumpBall::Period))
                    .col(integer(JumpBall::SecondsRemaining))
                    .col(
                        timestamp_with_time_zone(JumpBall::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_jump_ball_match_id")
                            .from(JumpBall::Table, JumpBall::MatchId)
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
            .drop_table(Table::drop().table(JumpBall::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum JumpBall {
    Table,
    Id,
    MatchId,
    Team1PlayerId,
    Team2PlayerId,
    WinnerTeamId,
    Period,
    SecondsRemaining,
    CreatedAt,
}
