//! Course entity and client trait.
//!
//! Courses are owned by the course service; the gateway only reads them
//! or forwards changes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::ServiceError;

/// A course offered to students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i32,

    pub name: String,

    pub category: String,

    /// Seat capacity (at least 1)
    pub max_students: i32,

    #[serde(default)]
    pub description: Option<String>,
}

impl Course {
    /// Seats left once `assigned` enrollments occupy the course.
    ///
    /// Negative when the course is over-enrolled.
    pub fn available_seats(&self, assigned: i64) -> i64 {
        i64::from(self.max_students) - assigned
    }

    /// Whether one more assigned enrollment would still fit.
    pub fn has_capacity_for(&self, assigned: i64) -> bool {
        self.available_seats(assigned) > 0
    }
}

/// Id/name pair returned by the batch lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseName {
    pub id: i32,
    pub name: String,
}

/// Fields of a course to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub name: String,
    pub max_students: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
}

/// Partial update of a course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_students: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Typed facade over the course service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseClient: Send + Sync {
    /// List every course, in the order the service returns them.
    async fn get_courses(&self) -> Result<Vec<Course>, ServiceError>;

    /// Fetch one course; `None` when it does not exist.
    async fn get_course(&self, id: i32) -> Result<Option<Course>, ServiceError>;

    /// Capacity of one course; `None` when it does not exist.
    async fn get_max_students(&self, id: i32) -> Result<Option<i32>, ServiceError>;

    /// Batch lookup of names for the given ids. Unknown ids are skipped.
    async fn get_courses_by_ids(&self, ids: Vec<i32>) -> Result<Vec<CourseName>, ServiceError>;

    async fn find_courses_by_name(&self, name: &str) -> Result<Vec<Course>, ServiceError>;

    async fn create_course(&self, course: NewCourse) -> Result<Course, ServiceError>;

    async fn update_course(&self, id: i32, changes: CourseChanges) -> Result<Course, ServiceError>;

    async fn delete_course(&self, id: i32) -> Result<Course, ServiceError>;
}
