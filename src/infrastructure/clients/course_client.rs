//! Course service client.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::instrument;

use super::{call, ServiceRequest};
use crate::domain::{Course, CourseChanges, CourseClient, CourseName, NewCourse, ServiceError};
use crate::infrastructure::messaging::ServiceTransport;

/// Operations understood by the course service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseRequest {
    GetCourses,
    GetCourse(i32),
    GetMaxStudents(i32),
    GetCoursesByIds(Vec<i32>),
    FindCoursesByName(String),
    Create(NewCourse),
    Update { id: i32, data: CourseChanges },
    Delete(i32),
}

impl ServiceRequest for CourseRequest {
    fn pattern(&self) -> &'static str {
        match self {
            CourseRequest::GetCourses => "get_courses",
            CourseRequest::GetCourse(_) => "get_course",
            CourseRequest::GetMaxStudents(_) => "get_max_students",
            CourseRequest::GetCoursesByIds(_) => "get_courses_by_ids",
            CourseRequest::FindCoursesByName(_) => "find_courses_by_name",
            CourseRequest::Create(_) => "create_course",
            CourseRequest::Update { .. } => "update_course",
            CourseRequest::Delete(_) => "delete_course",
        }
    }

    fn payload(&self) -> Value {
        match self {
            CourseRequest::GetCourses => json!({}),
            CourseRequest::GetCourse(id)
            | CourseRequest::GetMaxStudents(id)
            | CourseRequest::Delete(id) => json!(id),
            CourseRequest::GetCoursesByIds(ids) => json!(ids),
            CourseRequest::FindCoursesByName(name) => json!(name),
            CourseRequest::Create(course) => json!(course),
            CourseRequest::Update { id, data } => json!({ "id": id, "data": data }),
        }
    }
}

/// [`CourseClient`] over a message transport.
pub struct RemoteCourseClient {
    transport: Arc<dyn ServiceTransport>,
}

impl RemoteCourseClient {
    pub fn new(transport: Arc<dyn ServiceTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl CourseClient for RemoteCourseClient {
    #[instrument(skip(self))]
    async fn get_courses(&self) -> Result<Vec<Course>, ServiceError> {
        call(self.transport.as_ref(), CourseRequest::GetCourses).await
    }

    #[instrument(skip(self))]
    async fn get_course(&self, id: i32) -> Result<Option<Course>, ServiceError> {
        call(self.transport.as_ref(), CourseRequest::GetCourse(id)).await
    }

    #[instrument(skip(self))]
    async fn get_max_students(&self, id: i32) -> Result<Option<i32>, ServiceError> {
        call(self.transport.as_ref(), CourseRequest::GetMaxStudents(id)).await
    }

    #[instrument(skip(self), fields(count = ids.len()))]
    async fn get_courses_by_ids(&self, ids: Vec<i32>) -> Result<Vec<CourseName>, ServiceError> {
        call(self.transport.as_ref(), CourseRequest::GetCoursesByIds(ids)).await
    }

    #[instrument(skip(self))]
    async fn find_courses_by_name(&self, name: &str) -> Result<Vec<Course>, ServiceError> {
        call(
            self.transport.as_ref(),
            CourseRequest::FindCoursesByName(name.to_string()),
        )
        .await
    }

    #[instrument(skip(self, course))]
    async fn create_course(&self, course: NewCourse) -> Result<Course, ServiceError> {
        call(self.transport.as_ref(), CourseRequest::Create(course)).await
    }

    #[instrument(skip(self, changes))]
    async fn update_course(&self, id: i32, changes: CourseChanges) -> Result<Course, ServiceError> {
        call(
            self.transport.as_ref(),
            CourseRequest::Update { id, data: changes },
        )
        .await
    }

    #[instrument(skip(self))]
    async fn delete_course(&self, id: i32) -> Result<Course, ServiceError> {
        call(self.transport.as_ref(), CourseRequest::Delete(id)).await
    }
}
