//! Coach fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::coach;

/// Default test coach name.
pub const DEFAULT_NAME: &str = "Maria";

/// Default test coach surname.
pub const DEFAULT_SURNAME: &str = "Garcia";

/// Default test coach license ID.
pub const DEFAULT_LICENSE_ID: &str = "LIC-001";

/// Default test coach personal code.
pub const DEFAULT_PERSONAL_CODE: &str = "CC001";

/// Default coaching start date, 2015-08-01.
pub fn default_coaching_from() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 8, 1).unwrap_or_default()
}

/// Creates a coach entity model with default values.
pub fn entity() -> coach::Model {
    entity_builder().build()
}

/// Creates a coach entity builder for customization.
pub fn entity_builder() -> CoachEntityBuilder {
    CoachEntityBuilder::default()
}

/// Builder for creating customized coach entity models.
pub struct CoachEntityBuilder {
    id: i32,
    name: String,
    surname: String,
    coaching_from: NaiveDate,
    license_id: String,
    personal_code: String,
}

impl Default for CoachEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            surname: DEFAULT_SURNAME.to_string(),
            coaching_from: default_coaching_from(),
            license_id: DEFAULT_LICENSE_ID.to_string(),
            personal_code: DEFAULT_PERSONAL_CODE.to_string(),
        }
    }
}

impl CoachEntityBuilder {
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

    pub fn license_id(mut self, license_id: impl Into<String>) -> Self {
        self.license_id = license_id.into();
        self
    }

    pub fn personal_code(mut self, personal_code: impl Into<String>) -> Self {
        self.personal_code = personal_code.into();
        self
    }

    /// Builds the coach entity model.
    pub fn build(self) -> coach::Model {
        coach::Model {
            id: self.id,
            name: self.name,
            surname: self.surname,
            coaching_from: self.coaching_from,
            license_id: self.license_id,
            personal_code: self.personal_code,
        }
    }
}
