//! Test support for the courtside server.
//!
//! `TestBuilder` creates an in-memory SQLite database holding only the tables a test
//! asks for. The `factory` modules insert rows with usable defaults, and
//! `factory::helpers::create_match_with_dependencies` sets up two teams and an upcoming
//! match between them in one call.
//!
//! ```rust,ignore
//! let test = TestBuilder::new().with_game_tables().build().await?;
//! let db = test.db.as_ref().unwrap();
//! let (team1, team2, game) = factory::helpers::create_match_with_dependencies(db).await?;
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
