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
        player::{PlayerDto, PlayerFilterDto, PlayerRequestDto},
    },
    server::{
        error::AppError,
        model::player::{CreatePlayerParams, PlayerFilter, UpdatePlayerParams},
        service::player::PlayerService,
        state::AppState,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

/// List players.
///
/// Returns every player matching all provided filters, ordered by ID. `name` and
/// `surname` match case-insensitive substrings; `personalCode` must match exactly.
///
/// # Returns
/// - `200 OK` - Matching players
/// - `400 Bad Request` - Malformed query string
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/players",
    tag = PLAYER_TAG,
    params(PlayerFilterDto),
    responses(
        (status = 200, description = "Matching players", body = Vec<PlayerDto>),
        (status = 400, description = "Malformed query string", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players(
    State(state): State<AppState>,
    query: Result<Query<PlayerFilterDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(filter) = query?;

    let service = PlayerService::new(&state.db);

    let players = service.get_all(PlayerFilter::from_dto(filter)).await?;

    let dtos: Vec<PlayerDto> = players.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a player.
///
/// # Returns
/// - `200 OK` - Created player with its assigned ID
/// - `400 Bad Request` - Missing required field or malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/players",
    tag = PLAYER_TAG,
    request_body = PlayerRequestDto,
    responses(
        (status = 200, description = "Successfully created player", body = PlayerDto),
        (status = 400, description = "Invalid player data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    payload: Result<Json<PlayerRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    // Validate before touching the database
    let params = CreatePlayerParams::from_dto(payload)?;

    let service = PlayerService::new(&state.db);

    let player = service.create(params).await?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// Get a player by ID.
///
/// # Returns
/// - `200 OK` - The player
/// - `404 Not Found` - No player with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved player", body = PlayerDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player_by_id(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let service = PlayerService::new(&state.db);

    let player = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Player not found with id: {}", id)))?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// Replace a player's fields.
///
/// Every field is overwritten. A missing ID is reported, never created.
///
/// # Returns
/// - `200 OK` - Updated player
/// - `400 Bad Request` - Missing required field or malformed body
/// - `404 Not Found` - No player with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i32, Path, description = "Player ID")
    ),
    request_body = PlayerRequestDto,
    responses(
        (status = 200, description = "Successfully updated player", body = PlayerDto),
        (status = 400, description = "Invalid player data", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PlayerRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let params = UpdatePlayerParams::from_dto(id, payload)?;

    let service = PlayerService::new(&state.db);

    let player = service
        .update(params)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Player not found with id: {}", id)))?;

    Ok((StatusCode::OK, Json(player.into_dto())))
}

/// Delete a player.
///
/// Removes the player from every team that lists them, then deletes the player.
///
/// # Returns
/// - `200 OK` - Player deleted
/// - `404 Not Found` - No player with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(
        ("id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted player"),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_player(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let service = PlayerService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(format!(
            "Player not found with id: {}",
            id
        )));
    }

    Ok(StatusCode::OK)
}
