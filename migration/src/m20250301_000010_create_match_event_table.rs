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
                    .table(MatchEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchEvent::Id))
                    .col(integer(MatchEvent::MatchId))
                    .col(string(MatchEvent::EventType))
                    .col(integer(MatchEvent::Period))
                    .col(integer(MatchEvent::SecondsRemaining))
                    .col(integer(MatchEvent::Minute).default(0))
                    .col(integer(MatchEvent::SequenceNumber))
                    .col(integer_null(MatchEvent::TeamId))
                    .col(integer_null(MatchEvent::PlayerId))
                    .col(integer_null(MatchEvent::AssistPlayerId))
                    .col(text_null(MatchEvent::Description))
                    .col(boolean(MatchEvent::IsUndone).default(false))
                    .col(
                        timestamp_with_time_zone(MatchEvent::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_event_match_id")
                            .from(MatchEvent::Table, MatchEvent::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_event_team_id")
                            .from(MatchEvent::Table, MatchEvent::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_event_player_id")
                            .from(MatchEvent::Table, MatchEvent::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_event_assist_player_id")
                            .from(MatchEvent::Table, MatchEvent::AssistPlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Play-by-play ordering relies on one sequence number per event within a match.
        manager
            .create_index(
                Index::create()
                    .name("idx_match_event_sequence")
                    .table(MatchEvent::Table)
                    .col(MatchEvent::MatchId)
                    .col(MatchEvent::SequenceNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MatchEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MatchEvent {
    Table,
    Id,
    MatchId,
    EventType,
    Period,
    SecondsRemaining,
    Minute,
    SequenceNumber,
    TeamId,
    PlayerId,
    AssistPlayerId,
    Description,
    IsUndone,
    CreatedAt,
}
