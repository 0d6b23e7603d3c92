//! Student entity and client trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Career / program label
    pub career: String,
}

/// Fields of a student to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub career: String,
}

/// Partial update of a student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career: Option<String>,
}

/// Typed facade over the student service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentClient: Send + Sync {
    async fn get_students(&self) -> Result<Vec<Student>, ServiceError>;

    async fn get_student(&self, id: i32) -> Result<Option<Student>, ServiceError>;

    /// Students whose first name contains `name`.
    async fn find_students_by_name(&self, name: &str) -> Result<Vec<Student>, ServiceError>;

    async fn create_student(&self, student: NewStudent) -> Result<Student, ServiceError>;

    async fn update_student(&self, id: i32, changes: StudentChanges) -> Result<Student, ServiceError>;

    async fn delete_student(&self, id: i32) -> Result<Student, ServiceError>;
}
