//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows directly through SeaORM so tests
//! can set up state without going through the repositories under test.
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
//!     // Create with defaults
//!     let player = factory::create_player(&db).await?;
//!     let coach = factory::create_coach(&db).await?;
//!
//!     // Create a team with a coach and two players
//!     let (coach, players, team) = factory::helpers::create_team_with_members(&db, 2).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let player = factory::player::PlayerFactory::new(&db)
//!     .name("James")
//!     .surname("Wilson")
//!     .build()
//!     .await?;
//!
//! let team = factory::team::TeamFactory::new(&db)
//!     .coach_id(Some(coach.id))
//!     .player_ids(vec![player.id])
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `player` - Create player entities
//! - `coach` - Create coach entities
//! - `team` - Create team entities and their player memberships
//! - `helpers` - ID generation and entities with dependencies

pub mod coach;
pub mod helpers;
pub mod player;
pub mod team;

// Re-export commonly used factory functions for concise usage
pub use coach::create_coach;
pub use player::create_player;
pub use team::{add_team_player, create_team};
