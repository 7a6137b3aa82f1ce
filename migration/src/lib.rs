pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_league_table;
mod m20250301_000003_create_season_table;
mod m20250301_000004_create_team_table;
mod m20250301_000005_create_player_table;
mod m20250301_000006_create_staff_table;
mod m20250301_000007_create_game_rules_table;
mod m20250301_000008_create_matches_table;
mod m20250301_000009_create_match_player_table;
mod m20250301_000010_create_match_event_table;
mod m20250301_000011_create_match_period_table;
mod m20250301_000012_create_timeout_table;
mod m20250301_000013_create_substitution_table;
mod m20250301_000014_create_jump_ball_table;
mod m20250301_000015_create_news_article_table;
mod m20250301_000016_create_comment_table;
mod m20250301_000017_create_setting_table;
mod m20250301_000018_create_page_table;
mod m20250301_000019_create_media_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_league_table::Migration),
            Box::new(m20250301_000003_create_season_table::Migration),
            Box::new(m20250301_000004_create_team_table::Migration),
            Box::new(m20250301_000005_create_player_table::Migration),
            Box::new(m20250301_000006_create_staff_table::Migration),
            Box::new(m20250301_000007_create_game_rules_table::Migration),
            Box::new(m20250301_000008_create_matches_table::Migration),
            Box::new(m20250301_000009_create_match_player_table::Migration),
            Box::new(m20250301_000010_create_match_event_table::Migration),
            Box::new(m20250301_000011_create_match_period_table::Migration),
            Box::new(m20250301_000012_create_timeout_table::Migration),
            Box::new(m20250301_000013_create_substitution_table::Migration),
            Box::new(m20250301_000014_create_jump_ball_table::Migration),
            Box::new(m20250301_000015_create_news_article_table::Migration),
            Box::new(m20250301_000016_create_comment_table::Migration),
            Box::new(m20250301_000017_create_setting_table::Migration),
            Box::new(m20250301_000018_create_page_table::Migration),
            Box::new(m20250301_000019_create_media_table::Migration),
        ]
    }
}
