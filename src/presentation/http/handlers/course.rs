//! Course Handlers
//!
//! Plain passthroughs to the course service, plus the per-course seat view.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{CreateCourseRequest, NameQueryParams, UpdateCourseRequest};
use crate::domain::{AvailableSeats, Course};
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::shared::validation::parse_id;
use crate::startup::AppState;

/// List courses
pub async fn get_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    Ok(Json(state.courses.get_courses().await?))
}

/// Search courses by name
pub async fn search_courses(
    State(state): State<AppState>,
    Query(params): Query<NameQueryParams>,
) -> Result<Json<Vec<Course>>, AppError> {
    Ok(Json(state.courses.find_courses_by_name(&params.name).await?))
}

/// Get course by ID
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<Course>, AppError> {
    let course_id = parse_id(&course_id, "course")?;

    let course = state
        .courses
        .get_course(course_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".into()))?;

    Ok(Json(course))
}

/// Create a new course
pub async fn create_course(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateCourseRequest>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let course = state.courses.create_course(body.into()).await?;

    Ok((StatusCode::CREATED, Json(course)))
}

/// Update course
pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateCourseRequest>,
) -> Result<Json<Course>, AppError> {
    let course_id = parse_id(&course_id, "course")?;
    let course = state.courses.update_course(course_id, body.into()).await?;

    Ok(Json(course))
}

/// Delete course, returning the removed record
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<Course>, AppError> {
    let course_id = parse_id(&course_id, "course")?;

    Ok(Json(state.courses.delete_course(course_id).await?))
}

/// Free seats in one course
pub async fn get_available_seats(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<AvailableSeats>, AppError> {
    let course_id = parse_id(&course_id, "course")?;

    Ok(Json(state.aggregator.available_seats(course_id).await?))
}
