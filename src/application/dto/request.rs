//! Request DTOs
//!
//! Data structures for API request bodies. Field names follow the camelCase
//! convention of the data services.

use serde::Deserialize;
use validator::Validate;

use crate::domain::{
    CourseChanges, EnrollmentChanges, NewCourse, NewEnrollment, NewStudent, StudentChanges,
};

/// Create course request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub max_students: i32,

    pub description: Option<String>,

    #[validate(length(min = 1, message = "Category must not be empty"))]
    pub category: String,
}

impl From<CreateCourseRequest> for NewCourse {
    fn from(req: CreateCourseRequest) -> Self {
        Self {
            name: req.name,
            max_students: req.max_students,
            description: req.description,
            category: req.category,
        }
    }
}

/// Update course request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub max_students: Option<i32>,

    pub description: Option<String>,

    pub category: Option<String>,
}

impl From<UpdateCourseRequest> for CourseChanges {
    fn from(req: UpdateCourseRequest) -> Self {
        Self {
            name: req.name,
            max_students: req.max_students,
            description: req.description,
            category: req.category,
        }
    }
}

/// Create enrollment request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnrollmentRequest {
    pub student_id: i32,

    pub course_id: i32,

    #[validate(length(min = 1, message = "Semester must not be empty"))]
    pub semester: String,

    #[validate(range(min = 0, max = 5, message = "Final grade must be between 0 and 5"))]
    pub final_grade: Option<i32>,

    pub is_assigned: Option<bool>,
}

impl From<CreateEnrollmentRequest> for NewEnrollment {
    fn from(req: CreateEnrollmentRequest) -> Self {
        Self {
            student_id: req.student_id,
            course_id: req.course_id,
            semester: req.semester,
            final_grade: req.final_grade,
            is_assigned: req.is_assigned,
        }
    }
}

/// Update enrollment request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnrollmentRequest {
    pub student_id: Option<i32>,

    pub course_id: Option<i32>,

    pub semester: Option<String>,

    #[validate(range(min = 0, max = 5, message = "Final grade must be between 0 and 5"))]
    pub final_grade: Option<i32>,

    pub is_assigned: Option<bool>,
}

impl From<UpdateEnrollmentRequest> for EnrollmentChanges {
    fn from(req: UpdateEnrollmentRequest) -> Self {
        Self {
            student_id: req.student_id,
            course_id: req.course_id,
            semester: req.semester,
            final_grade: req.final_grade,
            is_assigned: req.is_assigned,
        }
    }
}

/// Create student request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "Last name must not be empty"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(min = 1, message = "Career must not be empty"))]
    pub career: String,
}

impl From<CreateStudentRequest> for NewStudent {
    fn from(req: CreateStudentRequest) -> Self {
        Self {
            name: req.name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            career: req.career,
        }
    }
}

/// Update student request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    pub name: Option<String>,

    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub phone: Option<String>,

    pub career: Option<String>,
}

impl From<UpdateStudentRequest> for StudentChanges {
    fn from(req: UpdateStudentRequest) -> Self {
        Self {
            name: req.name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            career: req.career,
        }
    }
}

/// Name search query parameters
#[derive(Debug, Deserialize)]
pub struct NameQueryParams {
    pub name: String,
}
