use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000004_create_team_table::Team, m20250301_000005_create_player_table::Player,
    m20250301_000008_create_matches_table::Matches,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Substitution::Table)
                    .if_not_exists()
                    .col(pk_auto(Substitution::Id))
                    .col(integer(Substitution::MatchId))
                    .col(integer(Substitution::TeamId))
                    .col(integer(Substitution::PlayerInId))
                    .col(integer(Substitution::PlayerOutId))
                    .col(integer(Substitution::Period))
                    .col(integer(Substitution::SecondsRemaining))
                    .col(
                        timestamp_with_time_zone(Substitution::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_substitution_match_id")
                            .from(Substitution::Table, Substitution::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_substitution_team_id")
                            .from(Substitution::Table, Substitution::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_substitution_player_in_id")
                            .from(Substitution::Table, Substitution::PlayerInId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_substitution_player_out_id")
                            .from(Substitution::Table, Substitution::PlayerOutId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Substitution::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Substitution {
    Table,
    Id,
    MatchId,
    TeamId,
    PlayerInId,
    PlayerOutId,
    Period,
    SecondsRemaining,
    CreatedAt,
}
