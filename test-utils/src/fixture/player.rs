//! Player fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::player;

/// Default test player name.
pub const DEFAULT_NAME: &str = "James";

/// Default test player surname.
pub const DEFAULT_SURNAME: &str = "Wilson";

/// Default test player personal code.
pub const DEFAULT_PERSONAL_CODE: &str = "PC789";

/// Default date of birth, 1995-05-15.
pub fn default_date_of_birth() -> NaiveDate {
    NaiveDate::from_ymd_opt(1995, 5, 15).unwrap_or_default()
}

/// Creates a player entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"James"`
/// - surname: `"Wilson"`
/// - date_of_birth: `1995-05-15`
/// - personal_code: `"PC789"`
pub fn entity() -> player::Model {
    entity_builder().build()
}

/// Creates a player entity builder for customization.
pub fn entity_builder() -> PlayerEntityBuilder {
    PlayerEntityBuilder::default()
}

/// Builder for creating customized player entity models.
pub struct PlayerEntityBuilder {
    id: i32,
    name: String,
    surname: String,
    date_of_birth: NaiveDate,
    personal_code: String,
}

impl Default for PlayerEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            surname: DEFAULT_SURNAME.to_string(),
            date_of_birth: default_date_of_birth(),
            personal_code: DEFAULT_PERSONAL_CODE.to_string(),
        }
    }
}

impl PlayerEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = surname.into();
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.date_of_birth = date_of_birth;
        self
    }

    pub fn personal_code(mut self, personal_code: impl Into<String>) -> Self {
        self.personal_code = personal_code.into();
        self
    }

    /// Builds the player entity model.
    pub fn build(self) -> player::Model {
        player::Model {
            id: self.id,
            name: self.name,
            surname: self.surname,
            date_of_birth: self.date_of_birth,
            personal_code: self.personal_code,
        }
    }
}
