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
        coach::{CoachDto, CoachFilterDto, CoachRequestDto},
    },
    server::{
        error::AppError,
        model::coach::{CreateCoachParams, CoachFilter, UpdateCoachParams},
        service::coach::CoachService,
        state::AppState,
    },
};

/// Tag for grouping coach endpoints in OpenAPI documentation
pub static COACH_TAG: &str = "coach";

/// List coaches.
///
/// `name` and `surname` match case-insensitive substrings; `licenseId` and
/// `personalCode` must match exactly.
///
/// # Returns
/// - `200 OK` - Matching coaches ordered by ID
/// - `400 Bad Request` - Malformed query string
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/coaches",
    tag = COACH_TAG,
    params(CoachFilterDto),
    responses(
        (status = 200, description = "Matching coaches", body = Vec<CoachDto>),
        (status = 400, description = "Malformed query string", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_coaches(
    State(state): State<AppState>,
    query: Result<Query<CoachFilterDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(filter) = query?;

    let service = CoachService::new(&state.db);

    let coaches = service.get_all(CoachFilter::from_dto(filter)).await?;

    let dtos: Vec<CoachDto> = coaches.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a coach.
///
/// # Returns
/// - `200 OK` - Created coach
/// - `400 Bad Request` - Missing required field or malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/coaches",
    tag = COACH_TAG,
    request_body = CoachRequestDto,
    responses(
        (status = 200, description = "Successfully created coach", body = CoachDto),
        (status = 400, description = "Invalid coach data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_coach(
    State(state): State<AppState>,
    payload: Result<Json<CoachRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = CreateCoachParams::from_dto(payload)?;

    let service = CoachService::new(&state.db);

    let coach = service.create(params).await?;

    Ok((StatusCode::OK, Json(coach.into_dto())))
}

/// Get a coach by ID.
#[utoipa::path(
    get,
    path = "/api/coaches/{id}",
    tag = COACH_TAG,
    params(
        ("id" = i32, Path, description = "Coach ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved coach", body = CoachDto),
        (status = 404, description = "Coach not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_coach_by_id(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let service = CoachService::new(&state.db);

    let coach = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Coach not found with id: {}", id)))?;

    Ok((StatusCode::OK, Json(coach.into_dto())))
}

/// Replace a coach's fields.
///
/// # Returns
/// - `200 OK` - Updated coach
/// - `400 Bad Request` - Missing required field or malformed body
/// - `404 Not Found` - No coach with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/coaches/{id}",
    tag = COACH_TAG,
    params(
        ("id" = i32, Path, description = "Coach ID")
    ),
    request_body = CoachRequestDto,
    responses(
        (status = 200, description = "Successfully updated coach", body = CoachDto),
        (status = 400, description = "Invalid coach data", body = ErrorDto),
        (status = 404, description = "Coach not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_coach(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CoachRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let params = UpdateCoachParams::from_dto(id, payload)?;

    let service = CoachService::new(&state.db);

    let coach = service
        .update(params)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Coach not found with id: {}", id)))?;

    Ok((StatusCode::OK, Json(coach.into_dto())))
}

/// Delete a coach.
///
/// Teams coached by this coach are left without a coach.
///
/// # Returns
/// - `200 OK` - Coach deleted
/// - `404 Not Found` - No coach with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/coaches/{id}",
    tag = COACH_TAG,
    params(
        ("id" = i32, Path, description = "Coach ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted coach"),
        (status = 404, description = "Coach not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_coach(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let service = CoachService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(format!(
            "Coach not found with id: {}",
            id
        )));
    }

    Ok(StatusCode::OK)
}
