//! Student service client.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::instrument;

use super::{call, ServiceRequest};
use crate::domain::{NewStudent, ServiceError, Student, StudentChanges, StudentClient};
use crate::infrastructure::messaging::ServiceTransport;

/// Operations understood by the student service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentRequest {
    GetStudents,
    GetStudent(i32),
    FindStudentsByName(String),
    Create(NewStudent),
    Update { id: i32, data: StudentChanges },
    Delete(i32),
}

impl ServiceRequest for StudentRequest {
    fn pattern(&self) -> &'static str {
        match self {
            StudentRequest::GetStudents => "get_students",
            StudentRequest::GetStudent(_) => "get_student",
            StudentRequest::FindStudentsByName(_) => "find_students_by_name",
            StudentRequest::Create(_) => "create_student",
            StudentRequest::Update { .. } => "update_student",
            StudentRequest::Delete(_) => "delete_student",
        }
    }

    fn payload(&self) -> Value {
        match self {
            StudentRequest::GetStudents => json!({}),
            StudentRequest::GetStudent(id) | StudentRequest::Delete(id) => json!(id),
            StudentRequest::FindStudentsByName(name) => json!(name),
            StudentRequest::Create(student) => json!(student),
            StudentRequest::Update { id, data } => json!({ "id": id, "data": data }),
        }
    }
}

/// [`StudentClient`] over a message transport.
pub struct RemoteStudentClient {
    transport: Arc<dyn ServiceTransport>,
}

impl RemoteStudentClient {
    pub fn new(transport: Arc<dyn ServiceTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl StudentClient for RemoteStudentClient {
    #[instrument(skip(self))]
    async fn get_students(&self) -> Result<Vec<Student>, ServiceError> {
        call(self.transport.as_ref(), StudentRequest::GetStudents).await
    }

    #[instrument(skip(self))]
    async fn get_student(&self, id: i32) -> Result<Option<Student>, ServiceError> {
        call(self.transport.as_ref(), StudentRequest::GetStudent(id)).await
    }

    #[instrument(skip(self))]
    async fn find_students_by_name(&self, name: &str) -> Result<Vec<Student>, ServiceError> {
        call(
            self.transport.as_ref(),
            StudentRequest::FindStudentsByName(name.to_string()),
        )
        .await
    }

    #[instrument(skip(self, student))]
    async fn create_student(&self, student: NewStudent) -> Result<Student, ServiceError> {
        call(self.transport.as_ref(), StudentRequest::Create(student)).await
    }

    #[instrument(skip(self, changes))]
    async fn update_student(&self, id: i32, changes: StudentChanges) -> Result<Student, ServiceError> {
        call(
            self.transport.as_ref(),
            StudentRequest::Update { id, data: changes },
        )
        .await
    }

    #[instrument(skip(self))]
    async fn delete_student(&self, id: i32) -> Result<Student, ServiceError> {
        call(self.transport.as_ref(), StudentRequest::Delete(id)).await
    }
}
