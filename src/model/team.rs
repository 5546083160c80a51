use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    model::{coach::CoachDto, player::PlayerDto},
    server::util::query::empty_as_none,
};

/// Body of `POST /api/teams` and `PUT /api/teams/{id}`.
///
/// `coachId` and `playerIds` are optional. On update the submitted values
/// replace the team's current coach and player set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamRequestDto {
    pub team_name: Option<String>,
    pub year_created: Option<i32>,
    pub coach_id: Option<i32>,
    pub player_ids: Option<Vec<i32>>,
}

/// Team with its coach and players resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub team_id: i32,
    pub team_name: String,
    pub year_created: i32,
    pub coach: Option<CoachDto>,
    pub players: Vec<PlayerDto>,
}

/// Query string of `GET /api/teams`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TeamFilterDto {
    /// Case-insensitive substring of the team name
    pub team_name: Option<String>,
    /// Exact year the team was created
    #[serde(default, deserialize_with = "empty_as_none")]
    pub year_created: Option<i32>,
    /// Only teams coached by this coach
    #[serde(default, deserialize_with = "empty_as_none")]
    pub coach_id: Option<i32>,
    /// Only teams containing this player
    #[serde(default, deserialize_with = "empty_as_none")]
    pub player_id: Option<i32>,
}
