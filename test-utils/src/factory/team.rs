//! Team factory for creating test team entities and memberships.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields.
///
/// Player memberships are inserted into the join table after the team row.
/// Referenced coaches and players must already exist.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::team::TeamFactory;
///
/// let team = TeamFactory::new(&db)
///     .team_name("Eagles")
///     .coach_id(Some(coach.id))
///     .player_ids(vec![player.id])
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    team_name: String,
    year_created: i32,
    coach_id: Option<i32>,
    player_ids: Vec<i32>,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - team_name: `"Team {id}"` where id is auto-incremented
    /// - year_created: `2024`
    /// - coach_id: `None`
    /// - player_ids: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            team_name: format!("Team {}", id),
            year_created: 2024,
            coach_id: None,
            player_ids: Vec::new(),
        }
    }

    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = team_name.into();
        self
    }

    pub fn year_created(mut self, year_created: i32) -> Self {
        self.year_created = year_created;
        self
    }

    pub fn coach_id(mut self, coach_id: Option<i32>) -> Self {
        self.coach_id = coach_id;
        self
    }

    pub fn player_ids(mut self, player_ids: Vec<i32>) -> Self {
        self.player_ids = player_ids;
        self
    }

    /// Builds and inserts the team entity and its memberships into the database.
    ///
    /// # Returns
    /// - `Ok(entity::team::Model)` - Created team entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        let team = entity::team::ActiveModel {
            team_id: ActiveValue::NotSet,
            team_name: ActiveValue::Set(self.team_name),
            year_created: ActiveValue::Set(self.year_created),
            coach_id: ActiveValue::Set(self.coach_id),
        }
        .insert(self.db)
        .await?;

        for player_id in self.player_ids {
            add_team_player(self.db, team.team_id, player_id).await?;
        }

        Ok(team)
    }
}

/// Creates a team with default values and no coach or players.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).build().await
}

/// Inserts a single team membership row.
pub async fn add_team_player(
    db: &DatabaseConnection,
    team_id: i32,
    player_id: i32,
) -> Result<entity::team_player::Model, DbErr> {
    entity::team_player::ActiveModel {
        team_id: ActiveValue::Set(team_id),
        player_id: ActiveValue::Set(player_id),
    }
    .insert(db)
    .await
}
