//! Enrollment Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{CreateEnrollmentRequest, UpdateEnrollmentRequest};
use crate::domain::Enrollment;
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::shared::validation::parse_id;
use crate::startup::AppState;

/// List enrollments
pub async fn get_enrollments(State(state): State<AppState>) -> Result<Json<Vec<Enrollment>>, AppError> {
    Ok(Json(state.enrollments.get_enrollments().await?))
}

/// Get enrollment by ID
pub async fn get_enrollment(
    State(state): State<AppState>,
    Path(enrollment_id): Path<String>,
) -> Result<Json<Enrollment>, AppError> {
    let enrollment_id = parse_id(&enrollment_id, "enrollment")?;

    let enrollment = state
        .enrollments
        .get_enrollment(enrollment_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Enrollment not found".into()))?;

    Ok(Json(enrollment))
}

/// Create a new enrollment
pub async fn create_enrollment(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateEnrollmentRequest>,
) -> Result<(StatusCode, Json<Enrollment>), AppError> {
    let enrollment = state.enrollments.create_enrollment(body.into()).await?;

    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// Update enrollment
pub async fn update_enrollment(
    State(state): State<AppState>,
    Path(enrollment_id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateEnrollmentRequest>,
) -> Result<Json<Enrollment>, AppError> {
    let enrollment_id = parse_id(&enrollment_id, "enrollment")?;
    let enrollment = state
        .enrollments
        .update_enrollment(enrollment_id, body.into())
        .await?;

    Ok(Json(enrollment))
}

/// Delete enrollment, returning the removed record
pub async fn delete_enrollment(
    State(state): State<AppState>,
    Path(enrollment_id): Path<String>,
) -> Result<Json<Enrollment>, AppError> {
    let enrollment_id = parse_id(&enrollment_id, "enrollment")?;

    Ok(Json(state.enrollments.delete_enrollment(enrollment_id).await?))
}
