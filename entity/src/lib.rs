//! SeaORM entity models for the roster database.
//!
//! One module per table. `team_player` is the join table backing the
//! many-to-many association between teams and players.

pub mod prelude;

pub mod coach;
pub mod player;
pub mod team;
pub mod team_player;
