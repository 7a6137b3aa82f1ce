use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "match_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_id: i32,
    pub event_type: String,
    pub period: i32,
    pub seconds_remaining: i32,
    pub minute: i32,
    pub sequence_number: i32,
    pub team_id: Option<i32>,
    pub player_id: Option<i32>,
    pub assist_player_id: Option<i32>,
    pub description: Option<String>,
    pub is_undone: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::matches::Entity",
        from = "Column::MatchId",
        to = "super::matches::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Match,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Team,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Player,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::AssistPlayerId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    AssistPlayer,
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Match.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
