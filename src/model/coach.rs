use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Body of `POST /api/coaches` and `PUT /api/coaches/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoachRequestDto {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub coaching_from: Option<NaiveDate>,
    pub license_id: Option<String>,
    pub personal_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoachDto {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub coaching_from: NaiveDate,
    pub license_id: String,
    pub personal_code: String,
}

/// Query string of `GET /api/coaches`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CoachFilterDto {
    /// Case-insensitive substring of the coach's name
    pub name: Option<String>,
    /// Case-insensitive substring of the coach's surname
    pub surname: Option<String>,
    /// Exact license ID
    pub license_id: Option<String>,
    /// Exact personal code
    pub personal_code: Option<String>,
}
