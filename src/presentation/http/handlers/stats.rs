//! Statistics Handlers
//!
//! Aggregated views backing the admin dashboard.

use axum::{extract::State, Json};

use crate::domain::{Course, CourseCount, CourseCountWithName, CourseEnrollmentSummary, DashboardStats};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Courses with at least one free seat
pub async fn get_available_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    Ok(Json(state.aggregator.available_courses().await?))
}

/// Distinct students per course
pub async fn get_course_enrollment_summary(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseEnrollmentSummary>>, AppError> {
    Ok(Json(state.aggregator.course_enrollment_summary().await?))
}

/// Assigned enrollments per course, with course names
pub async fn get_assigned_counts(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseCountWithName>>, AppError> {
    Ok(Json(state.aggregator.assigned_counts_with_names().await?))
}

/// Waitlisted requests per course
pub async fn get_unassigned_counts(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseCount>>, AppError> {
    Ok(Json(state.enrollments.get_unassigned_count_by_course().await?))
}

/// Dashboard counters and top courses
pub async fn get_dashboard_stats(State(state): State<AppState>) -> Result<Json<DashboardStats>, AppError> {
    Ok(Json(state.aggregator.dashboard_stats().await?))
}

/// Number of courses
pub async fn count_courses(State(state): State<AppState>) -> Result<Json<usize>, AppError> {
    Ok(Json(state.courses.get_courses().await?.len()))
}

/// Number of students
pub async fn count_students(State(state): State<AppState>) -> Result<Json<usize>, AppError> {
    Ok(Json(state.students.get_students().await?.len()))
}
