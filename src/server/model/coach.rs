//! Coach domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::coach::{CoachDto, CoachFilterDto, CoachRequestDto},
    server::{
        error::AppError,
        util::{
            filter::{contains_ignore_case, equals},
            validate::{require, require_text},
        },
    },
};

/// A persisted coach.
#[derive(Debug, Clone, PartialEq)]
pub struct Coach {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub coaching_from: NaiveDate,
    pub license_id: String,
    pub personal_code: String,
}

impl Coach {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::coach::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            surname: entity.surname,
            coaching_from: entity.coaching_from,
            license_id: entity.license_id,
            personal_code: entity.personal_code,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> CoachDto {
        CoachDto {
            id: self.id,
            name: self.name,
            surname: self.surname,
            coaching_from: self.coaching_from,
            license_id: self.license_id,
            personal_code: self.personal_code,
        }
    }
}

/// Scalar fields of a coach, validated from a request body.
#[derive(Debug, Clone, PartialEq)]
pub struct CoachFields {
    pub name: String,
    pub surname: String,
    pub coaching_from: NaiveDate,
    pub license_id: String,
    pub personal_code: String,
}

impl CoachFields {
    pub fn from_dto(dto: CoachRequestDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_text("name", dto.name)?,
            surname: require_text("surname", dto.surname)?,
            coaching_from: require("coachingFrom", dto.coaching_from)?,
            license_id: require_text("licenseId", dto.license_id)?,
            personal_code: require_text("personalCode", dto.personal_code)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateCoachParams {
    pub fields: CoachFields,
}

impl CreateCoachParams {
    pub fn from_dto(dto: CoachRequestDto) -> Result<Self, AppError> {
        Ok(Self {
            fields: CoachFields::from_dto(dto)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCoachParams {
    pub id: i32,
    pub fields: CoachFields,
}

impl UpdateCoachParams {
    pub fn from_dto(id: i32, dto: CoachRequestDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            fields: CoachFields::from_dto(dto)?,
        })
    }
}

/// Conjunctive list filter for coaches.
#[derive(Debug, Clone, Default)]
pub struct CoachFilter {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub license_id: Option<String>,
    pub personal_code: Option<String>,
}

impl CoachFilter {
    pub fn from_dto(dto: CoachFilterDto) -> Self {
        Self {
            name: dto.name,
            surname: dto.surname,
            license_id: dto.license_id,
            personal_code: dto.personal_code,
        }
    }

    pub fn matches(&self, coach: &Coach) -> bool {
        contains_ignore_case(&coach.name, self.name.as_deref())
            && contains_ignore_case(&coach.surname, self.surname.as_deref())
            && equals(coach.license_id.as_str(), self.license_id.as_deref())
            && equals(coach.personal_code.as_str(), self.personal_code.as_deref())
    }
}
