//! Student Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{CreateStudentRequest, NameQueryParams, UpdateStudentRequest};
use crate::domain::Student;
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::shared::validation::parse_id;
use crate::startup::AppState;

/// List students
pub async fn get_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    Ok(Json(state.students.get_students().await?))
}

/// Search students by first name
pub async fn search_students(
    State(state): State<AppState>,
    Query(params): Query<NameQueryParams>,
) -> Result<Json<Vec<Student>>, AppError> {
    Ok(Json(state.students.find_students_by_name(&params.name).await?))
}

/// Get student by ID
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Student>, AppError> {
    let student_id = parse_id(&student_id, "student")?;

    let student = state
        .students
        .get_student(student_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".into()))?;

    Ok(Json(student))
}

/// Create a new student
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateStudentRequest>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let student = state.students.create_student(body.into()).await?;

    Ok((StatusCode::CREATED, Json(student)))
}

/// Update student
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateStudentRequest>,
) -> Result<Json<Student>, AppError> {
    let student_id = parse_id(&student_id, "student")?;
    let student = state.students.update_student(student_id, body.into()).await?;

    Ok(Json(student))
}

/// Delete student, returning the removed record
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Student>, AppError> {
    let student_id = parse_id(&student_id, "student")?;

    Ok(Json(state.students.delete_student(student_id).await?))
}
