//! Coach factory for creating test coach entities.

use crate::{factory::helpers::next_id, fixture};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test coaches with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::coach::CoachFactory;
///
/// let coach = CoachFactory::new(&db)
///     .license_id("LIC-1")
///     .build()
///     .await?;
/// ```
pub struct CoachFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    surname: String,
    coaching_from: NaiveDate,
    license_id: String,
    personal_code: String,
}

impl<'a> CoachFactory<'a> {
    /// Creates a new CoachFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Coach {id}"` where id is auto-incremented
    /// - surname: `"Surname {id}"`
    /// - coaching_from: fixture default
    /// - license_id: `"LIC{id}"`
    /// - personal_code: `"CC{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Coach {}", id),
            surname: format!("Surname {}", id),
            coaching_from: fixture::coach::default_coaching_from(),
            license_id: format!("LIC{}", id),
            personal_code: format!("CC{}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = surname.into();
        self
    }

    pub fn coaching_from(mut self, coaching_from: NaiveDate) -> Self {
        self.coaching_from = coaching_from;
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

    /// Builds and inserts the coach entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::coach::Model)` - Created coach entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::coach::Model, DbErr> {
        entity::coach::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            surname: ActiveValue::Set(self.surname),
            coaching_from: ActiveValue::Set(self.coaching_from),
            license_id: ActiveValue::Set(self.license_id),
            personal_code: ActiveValue::Set(self.personal_code),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a coach with default values.
///
/// Shorthand for `CoachFactory::new(db).build().await`.
pub async fn create_coach(db: &DatabaseConnection) -> Result<entity::coach::Model, DbErr> {
    CoachFactory::new(db).build().await
}
