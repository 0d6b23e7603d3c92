//! Enrollment entity and client trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::ServiceError;

/// A student's request for a seat in a course during a semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: i32,

    pub student_id: i32,

    pub course_id: i32,

    pub semester: String,

    /// Final grade on the 0..=5 scale
    #[serde(default)]
    pub final_grade: Option<i32>,

    /// `true` when the enrollment occupies a seat, `false` while waitlisted
    #[serde(default)]
    pub is_assigned: bool,
}

/// Per-course count row produced by the enrollment service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCount {
    pub course_id: i32,

    #[serde(alias = "assignedCount")]
    pub count: i64,
}

/// Fields of an enrollment to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEnrollment {
    pub student_id: i32,
    pub course_id: i32,
    pub semester: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_grade: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_assigned: Option<bool>,
}

/// Partial update of an enrollment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_grade: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_assigned: Option<bool>,
}

/// Final grade a student obtained in one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseGrade {
    pub course_id: i32,

    /// `None` until the course is graded
    #[serde(default)]
    pub final_grade: Option<i32>,
}

/// Typed facade over the enrollment service.
///
/// "Assigned" always means `isAssigned = true`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentClient: Send + Sync {
    /// Number of assigned enrollments in one course.
    async fn get_assigned_count_by_course(&self, course_id: i32) -> Result<i64, ServiceError>;

    /// Assigned enrollment counts for every course that has any.
    async fn get_assigned_count_by_courses(&self) -> Result<Vec<CourseCount>, ServiceError>;

    /// Unassigned (waitlisted) request counts per course.
    async fn get_unassigned_count_by_course(&self) -> Result<Vec<CourseCount>, ServiceError>;

    /// Distinct students enrolled in one course, assigned or not.
    async fn get_unique_student_count_by_course(&self, course_id: i32) -> Result<i64, ServiceError>;

    async fn get_enrollments(&self) -> Result<Vec<Enrollment>, ServiceError>;

    async fn get_enrollment(&self, id: i32) -> Result<Option<Enrollment>, ServiceError>;

    async fn create_enrollment(&self, enrollment: NewEnrollment) -> Result<Enrollment, ServiceError>;

    async fn update_enrollment(
        &self,
        id: i32,
        changes: EnrollmentChanges,
    ) -> Result<Enrollment, ServiceError>;

    async fn delete_enrollment(&self, id: i32) -> Result<Enrollment, ServiceError>;

    /// Grades of one student across every course they enrolled in.
    async fn get_grades_by_student(&self, student_id: i32) -> Result<Vec<CourseGrade>, ServiceError>;

    /// Grade of one student in one course; `None` when they are not enrolled.
    async fn get_grade_by_student_and_course(
        &self,
        student_id: i32,
        course_id: i32,
    ) -> Result<Option<CourseGrade>, ServiceError>;

    /// Ids of the courses where the student holds a seat.
    async fn get_assigned_courses_by_student(&self, student_id: i32) -> Result<Vec<i32>, ServiceError>;

    /// Ids of the courses where the student is still waitlisted.
    async fn get_unassigned_courses_by_student(&self, student_id: i32) -> Result<Vec<i32>, ServiceError>;

    /// Mean final grade of one student; `None` when nothing is graded yet.
    async fn get_average_grade_by_student(&self, student_id: i32) -> Result<Option<f64>, ServiceError>;

    /// Mean final grade in one course; `None` when nothing is graded yet.
    async fn get_average_grade_by_course(&self, course_id: i32) -> Result<Option<f64>, ServiceError>;
}
