use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub team1_id: i32,
    pub team2_id: i32,
    pub league_id: Option<i32>,
    pub season_id: Option<i32>,
    pub game_rules_id: Option<i32>,
    pub venue: Option<String>,
    pub scheduled_at: DateTimeUtc,
    /// `UPCOMING`, `LIVE` or `COMPLETED`
    pub status: String,
    pub team1_score: i32,
    pub team2_score: i32,
    pub current_period: i32,
    pub clock_seconds: i32,
    pub clock_running: bool,
    pub team1_fouls: i32,
    pub team2_fouls: i32,
    pub team1_timeouts: i32,
    pub team2_timeouts: i32,
    pub possession_team_id: Option<i32>,
    /// Last sequence number handed out to an event of this match.
    pub event_sequence: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::Team1Id",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Team1,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::Team2Id",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Team2,
    #[sea_orm(
        belongs_to = "super::league::Entity",
        from = "Column::LeagueId",
        to = "super::league::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    League,
    #[sea_orm(
        belongs_to = "super::season::Entity",
        from = "Column::SeasonId",
        to = "super::season::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Season,
    #[sea_orm(
        belongs_to = "super::game_rules::Entity",
        from = "Column::GameRulesId",
        to = "super::game_rules::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    GameRules,
    #[sea_orm(has_many = "super::match_event::Entity")]
    MatchEvent,
    #[sea_orm(has_many = "super::match_period::Entity")]
    MatchPeriod,
    #[sea_orm(has_many = "super::match_player::Entity")]
    MatchPlayer,
}

impl Related<super::game_rules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameRules.def()
    }
}

impl Related<super::match_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchEvent.def()
    }
}

impl Related<super::match_period::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchPeriod.def()
    }
}

impl Related<super::match_player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchPlayer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
