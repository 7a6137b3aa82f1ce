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
                    .table(MatchPlayer::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchPlayer::Id))
                    .col(integer(MatchPlayer::MatchId))
                    .col(integer(MatchPlayer::PlayerId))
                    .col(integer(MatchPlayer::TeamId))
                    .col(integer_null(MatchPlayer::JerseyNumber))
                    .col(boolean(MatchPlayer::IsStarter).default(false))
                    .col(boolean(MatchPlayer::OnCourt).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_player_match_id")
                            .from(MatchPlayer::Table, MatchPlayer::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_player_player_id")
                            .from(MatchPlayer::Table, MatchPlayer::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_player_team_id")
                            .from(MatchPlayer::Table, MatchPlayer::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_match_player_unique")
                    .table(MatchPlayer::Table)
                    .col(MatchPlayer::MatchId)
                    .col(MatchPlayer::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MatchPlayer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MatchPlayer {
    Table,
    Id,
    MatchId,
    PlayerId,
    TeamId,
    JerseyNumber,
    IsStarter,
    OnCourt,
}
