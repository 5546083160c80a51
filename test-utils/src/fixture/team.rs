//! Team fixtures for creating in-memory test data.

use entity::team;

/// Default test team name.
pub const DEFAULT_TEAM_NAME: &str = "Eagles";

/// Default year the test team was created.
pub const DEFAULT_YEAR_CREATED: i32 = 2024;

/// Creates a team entity model with default values and no coach.
pub fn entity() -> team::Model {
    entity_builder().build()
}

/// Creates a team entity builder for customization.
pub fn entity_builder() -> TeamEntityBuilder {
    TeamEntityBuilder::default()
}

/// Builder for creating customized team entity models.
pub struct TeamEntityBuilder {
    team_id: i32,
    team_name: String,
    year_created: i32,
    coach_id: Option<i32>,
}

impl Default for TeamEntityBuilder {
    fn default() -> Self {
        Self {
            team_id: 1,
            team_name: DEFAULT_TEAM_NAME.to_string(),
            year_created: DEFAULT_YEAR_CREATED,
            coach_id: None,
        }
    }
}

impl TeamEntityBuilder {
    pub fn team_id(mut self, team_id: i32) -> Self {
        self.team_id = team_id;
        self
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

    /// Builds the team entity model.
    pub fn build(self) -> team::Model {
        team::Model {
            team_id: self.team_id,
            team_name: self.team_name,
            year_created: self.year_created,
            coach_id: self.coach_id,
        }
    }
}
