use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game_rules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub periods: i32,
    pub minutes_per_period: i32,
    pub overtime_minutes: i32,
    pub halftime_after_period: i32,
    pub team_fouls_for_bonus: i32,
    pub personal_foul_limit: i32,
    pub timeouts_per_team: i32,
    pub reset_timeouts_each_period: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::matches::Entity")]
    Match,
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Match.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
