pub use super::comment::Entity as Comment;
pub use super::game_rules::Entity as GameRules;
pub use super::jump_ball::Entity as JumpBall;
pub use super::league::Entity as League;
pub use super::match_event::Entity as MatchEvent;
pub use super::match_period::Entity as MatchPeriod;
pub use super::match_player::Entity as MatchPlayer;
pub use super::matches::Entity as Match;
pub use super::media::Entity as Media;
pub use super::news_article::Entity as NewsArticle;
pub use super::page::Entity as Page;
pub use super::player::Entity as Player;
pub use super::season::Entity as Season;
pub use super::setting::Entity as Setting;
pub use super::staff::Entity as Staff;
pub use super::substitution::Entity as Substitution;
pub use super::team::Entity as Team;
pub use super::timeout::Entity as Timeout;
pub use super::user::Entity as User;
