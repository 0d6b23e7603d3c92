//! Grade Handlers
//!
//! Per-student enrollment views and grade averages, answered by the
//! enrollment service.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::domain::{CourseAverageGrade, CourseGrade, StudentAverageGrade};
use crate::shared::error::AppError;
use crate::shared::validation::parse_id;
use crate::startup::AppState;

/// Final grades of one student
pub async fn get_student_grades(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<CourseGrade>>, AppError> {
    let student_id = parse_id(&student_id, "student")?;

    Ok(Json(state.enrollments.get_grades_by_student(student_id).await?))
}

/// Final grade of one student in one course
pub async fn get_student_course_grade(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(String, String)>,
) -> Result<Json<CourseGrade>, AppError> {
    let student_id = parse_id(&student_id, "student")?;
    let course_id = parse_id(&course_id, "course")?;

    let grade = state
        .enrollments
        .get_grade_by_student_and_course(student_id, course_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student is not enrolled in this course".into()))?;

    Ok(Json(grade))
}

/// Courses where the student holds a seat
pub async fn get_assigned_courses(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<i32>>, AppError> {
    let student_id = parse_id(&student_id, "student")?;

    Ok(Json(
        state.enrollments.get_assigned_courses_by_student(student_id).await?,
    ))
}

/// Courses where the student is waitlisted
pub async fn get_unassigned_courses(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<i32>>, AppError> {
    let student_id = parse_id(&student_id, "student")?;

    Ok(Json(
        state.enrollments.get_unassigned_courses_by_student(student_id).await?,
    ))
}

pub async fn get_student_average_grade(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<StudentAverageGrade>, AppError> {
    let student_id = parse_id(&student_id, "student")?;
    let average_grade = state.enrollments.get_average_grade_by_student(student_id).await?;

    Ok(Json(StudentAverageGrade {
        student_id,
        average_grade,
    }))
}

pub async fn get_course_average_grade(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseAverageGrade>, AppError> {
    let course_id = parse_id(&course_id, "course")?;
    let average_grade = state.enrollments.get_average_grade_by_course(course_id).await?;

    Ok(Json(CourseAverageGrade {
        course_id,
        average_grade,
    }))
}
