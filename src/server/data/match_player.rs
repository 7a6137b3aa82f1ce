use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::matches::{AddMatchPlayerParams, MatchPlayer};

/// Repository for match rosters and on-court flags.
pub struct MatchPlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchPlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a player to a match roster. Starters begin on court.
    ///
    /// # Returns
    /// - `Ok(MatchPlayer)` - The roster entry joined with the player's name
    /// - `Err(DbErr)` - Database error, including a duplicate entry for the player
    pub async fn add(&self, params: AddMatchPlayerParams) -> Result<MatchPlayer, DbErr> {
        let entity = entity::match_player::ActiveModel {
            match_id: ActiveValue::Set(params.match_id),
            player_id: ActiveValue::Set(params.player_id),
            team_id: ActiveValue::Set(params.team_id),
            jersey_number: ActiveValue::Set(params.jersey_number),
            is_starter: ActiveValue::Set(params.is_starter),
            on_court: ActiveValue::Set(params.is_starter),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let player = entity::prelude::Player::find_by_id(entity.player_id)
            .one(self.db)
            .await?;

        Ok(MatchPlayer::from_entity(entity, player))
    }

    /// Finds a player's roster entry for a match.
    pub async fn find(&self, match_id: i32, player_id: i32) -> Result<Option<MatchPlayer>, DbErr> {
        let entry = entity::prelude::MatchPlayer::find()
            .filter(entity::match_player::Column::MatchId.eq(match_id))
            .filter(entity::match_player::Column::PlayerId.eq(player_id))
            .find_also_related(entity::prelude::Player)
            .one(self.db)
            .await?;

        Ok(entry.map(|(entry, player)| MatchPlayer::from_entity(entry, player)))
    }

    /// Gets a match roster ordered by team, then starters first, then jersey number.
    pub async fn get_by_match(&self, match_id: i32) -> Result<Vec<MatchPlayer>, DbErr> {
        let entries = entity::prelude::MatchPlayer::find()
            .filter(entity::match_player::Column::MatchId.eq(match_id))
            .find_also_related(entity::prelude::Player)
            .order_by_asc(entity::match_player::Column::TeamId)
            .order_by_desc(entity::match_player::Column::IsStarter)
            .order_by_asc(entity::match_player::Column::JerseyNumber)
            .all(self.db)
            .await?;

        Ok(entries
            .into_iter()
            .map(|(entry, player)| MatchPlayer::from_entity(entry, player))
            .collect())
    }

    /// Sets whether a rostered player is on the court.
    ///
    /// # Returns
    /// - `Ok(true)` - Flag written
    /// - `Ok(false)` - Player is not on the match roster
    pub async fn set_on_court(
        &self,
        match_id: i32,
        player_id: i32,
        on_court: bool,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::MatchPlayer::update_many()
            .col_expr(
                entity::match_player::Column::OnCourt,
                sea_orm::sea_query::Expr::value(on_court),
            )
            .filter(entity::match_player::Column::MatchId.eq(match_id))
            .filter(entity::match_player::Column::PlayerId.eq(player_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes a player from a match roster.
    pub async fn remove(&self, match_id: i32, player_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MatchPlayer::delete_many()
            .filter(entity::match_player::Column::MatchId.eq(match_id))
            .filter(entity::match_player::Column::PlayerId.eq(player_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
