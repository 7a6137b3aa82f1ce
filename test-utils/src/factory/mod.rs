//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories never create
//! their dependencies implicitly; pass the parent ids in, or use `helpers` for the common
//! hierarchies.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let league = factory::league::create_league(&db).await?;
//!     let team = factory::team::create_team(&db, Some(league.id)).await?;
//!
//!     // Two teams, a match between them, default rules
//!     let (team1, team2, game) = factory::helpers::create_match_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let game = factory::matches::MatchFactory::new(&db, team1.id, team2.id)
//!     .status("LIVE")
//!     .current_period(2)
//!     .clock_seconds(300)
//!     .build()
//!     .await?;
//! ```

pub mod comment;
pub mod game_rules;
pub mod helpers;
pub mod league;
pub mod match_event;
pub mod match_player;
pub mod matches;
pub mod media;
pub mod news_article;
pub mod page;
pub mod player;
pub mod season;
pub mod team;
pub mod user;

pub use comment::create_comment;
pub use game_rules::create_game_rules;
pub use league::create_league;
pub use match_event::create_match_event;
pub use match_player::create_match_player;
pub use matches::create_match;
pub use media::create_media;
pub use news_article::create_news_article;
pub use page::create_page;
pub use player::create_player;
pub use season::create_season;
pub use team::create_team;
pub use user::create_user;
