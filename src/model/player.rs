use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Body of `POST /api/players` and `PUT /api/players/{id}`.
///
/// Every field is required; absence is reported as a 400 by the controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRequestDto {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub personal_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub date_of_birth: NaiveDate,
    pub personal_code: String,
}

/// Query string of `GET /api/players`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PlayerFilterDto {
    /// Case-insensitive substring of the player's name
    pub name: Option<String>,
    /// Case-insensitive substring of the player's surname
    pub surname: Option<String>,
    /// Exact personal code
    pub personal_code: Option<String>,
}
