pub use super::coach::Entity as Coach;
pub use super::player::Entity as Player;
pub use super::team::Entity as Team;
pub use super::team_player::Entity as TeamPlayer;
