//! Player domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::player::{PlayerDto, PlayerFilterDto, PlayerRequestDto},
    server::{
        error::AppError,
        util::{
            filter::{contains_ignore_case, equals},
            validate::{require, require_text},
        },
    },
};

/// A persisted player.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub date_of_birth: NaiveDate,
    pub personal_code: String,
}

impl Player {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            surname: entity.surname,
            date_of_birth: entity.date_of_birth,
            personal_code: entity.personal_code,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            name: self.name,
            surname: self.surname,
            date_of_birth: self.date_of_birth,
            personal_code: self.personal_code,
        }
    }
}

/// Scalar fields of a player, validated from a request body.
///
/// Used for both create and full-replace update.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerFields {
    pub name: String,
    pub surname: String,
    pub date_of_birth: NaiveDate,
    pub personal_code: String,
}

impl PlayerFields {
    /// Validates a request DTO.
    ///
    /// # Returns
    /// - `Ok(PlayerFields)` - All required fields present, text trimmed
    /// - `Err(AppError::BadRequest)` - First missing field, in wire order
    pub fn from_dto(dto: PlayerRequestDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_text("name", dto.name)?,
            surname: require_text("surname", dto.surname)?,
            date_of_birth: require("dateOfBirth", dto.date_of_birth)?,
            personal_code: require_text("personalCode", dto.personal_code)?,
        })
    }
}

/// Parameters for creating a new player.
#[derive(Debug, Clone)]
pub struct CreatePlayerParams {
    pub fields: PlayerFields,
}

impl CreatePlayerParams {
    pub fn from_dto(dto: PlayerRequestDto) -> Result<Self, AppError> {
        Ok(Self {
            fields: PlayerFields::from_dto(dto)?,
        })
    }
}

/// Parameters for replacing an existing player's fields.
#[derive(Debug, Clone)]
pub struct UpdatePlayerParams {
    pub id: i32,
    pub fields: PlayerFields,
}

impl UpdatePlayerParams {
    pub fn from_dto(id: i32, dto: PlayerRequestDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            fields: PlayerFields::from_dto(dto)?,
        })
    }
}

/// Conjunctive list filter for players.
#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub personal_code: Option<String>,
}

impl PlayerFilter {
    pub fn from_dto(dto: PlayerFilterDto) -> Self {
        Self {
            name: dto.name,
            surname: dto.surname,
            personal_code: dto.personal_code,
        }
    }

    /// Name and surname match case-insensitive substrings; personal code matches exactly.
    pub fn matches(&self, player: &Player) -> bool {
        contains_ignore_case(&player.name, self.name.as_deref())
            && contains_ignore_case(&player.surname, self.surname.as_deref())
            && equals(player.personal_code.as_str(), self.personal_code.as_deref())
    }
}
