use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        team::{TeamDto, TeamFilterDto, TeamRequestDto},
    },
    server::{
        error::AppError,
        model::team::{CreateTeamParams, TeamFilter, UpdateTeamParams},
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// List teams.
///
/// Returns every team matching all provided filters with coach and players
/// resolved. `teamName` matches a case-insensitive substring, `yearCreated` and
/// `coachId` match exactly, and `playerId` matches teams containing that player.
///
/// # Returns
/// - `200 OK` - Matching teams ordered by ID
/// - `400 Bad Request` - Malformed query string
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    params(TeamFilterDto),
    responses(
        (status = 200, description = "Matching teams", body = Vec<TeamDto>),
        (status = 400, description = "Malformed query string", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teams(
    State(state): State<AppState>,
    query: Result<Query<TeamFilterDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(filter) = query?;

    let service = TeamService::new(&state.db);

    let teams = service.get_all(TeamFilter::from_dto(filter)).await?;

    let dtos: Vec<TeamDto> = teams.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a team.
///
/// The optional coach and players are resolved before anything is written.
///
/// # Returns
/// - `200 OK` - Created team with coach and players resolved
/// - `400 Bad Request` - Missing required field, malformed body, or unknown coach or player
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = TeamRequestDto,
    responses(
        (status = 200, description = "Successfully created team", body = TeamDto),
        (status = 400, description = "Invalid team data or unknown reference", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    payload: Result<Json<TeamRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = CreateTeamParams::from_dto(payload)?;

    let service = TeamService::new(&state.db);

    let team = service.create(params).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Get a team by ID with its coach and players.
#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved team", body = TeamDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_by_id(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let service = TeamService::new(&state.db);

    let team = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Team not found with id: {}", id)))?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Replace a team.
///
/// The submitted coach and player set replace the current ones. Omitting
/// `coachId` clears the coach and omitting `playerIds` clears the players.
///
/// # Returns
/// - `200 OK` - Updated team
/// - `400 Bad Request` - Missing required field, malformed body, or unknown coach or player
/// - `404 Not Found` - No team with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    request_body = TeamRequestDto,
    responses(
        (status = 200, description = "Successfully updated team", body = TeamDto),
        (status = 400, description = "Invalid team data or unknown reference", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<TeamRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let params = UpdateTeamParams::from_dto(id, payload)?;

    let service = TeamService::new(&state.db);

    let team = service
        .update(params)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Team not found with id: {}", id)))?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Delete a team.
///
/// The coach and players are not affected.
///
/// # Returns
/// - `200 OK` - Team deleted
/// - `404 Not Found` - No team with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted team"),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let service = TeamService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(format!("Team not found with id: {}", id)));
    }

    Ok(StatusCode::OK)
}

/// Add a player to a team.
///
/// Adding a player who is already a member succeeds without change.
///
/// # Returns
/// - `200 OK` - Team with its updated players
/// - `404 Not Found` - Team or player does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/teams/{id}/players/{player_id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID"),
        ("player_id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Player is a member of the team", body = TeamDto),
        (status = 404, description = "Team or player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_player_to_team(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((team_id, player_id)) = path?;

    let service = TeamService::new(&state.db);

    let team = service.add_player(team_id, player_id).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Remove a player from a team.
///
/// Removing a player who is not a member succeeds without change.
///
/// # Returns
/// - `200 OK` - Team with its updated players
/// - `404 Not Found` - Team or player does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/teams/{id}/players/{player_id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID"),
        ("player_id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Player is no longer a member of the team", body = TeamDto),
        (status = 404, description = "Team or player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_player_from_team(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((team_id, player_id)) = path?;

    let service = TeamService::new(&state.db);

    let team = service.remove_player(team_id, player_id).await?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}
