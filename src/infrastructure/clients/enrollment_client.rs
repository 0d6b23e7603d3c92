//! Enrollment service client.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::instrument;

use super::{call, ServiceRequest};
use crate::domain::{
    CourseCount, CourseGrade, Enrollment, EnrollmentChanges, EnrollmentClient, NewEnrollment, ServiceError,
};
use crate::infrastructure::messaging::ServiceTransport;

/// Operations understood by the enrollment service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentRequest {
    GetAssignedCountByCourse(i32),
    GetAssignedCountByCourses,
    GetUnassignedCountByCourse,
    GetUniqueStudentCountByCourse(i32),
    GetEnrollments,
    GetEnrollment(i32),
    Create(NewEnrollment),
    Update { id: i32, data: EnrollmentChanges },
    Delete(i32),
    GetGradesByStudent(i32),
    GetGradeByStudentAndCourse { student_id: i32, course_id: i32 },
    GetAssignedCoursesByStudent(i32),
    GetUnassignedCoursesByStudent(i32),
    GetAverageGradeByStudent(i32),
    GetAverageGradeByCourse(i32),
}

impl ServiceRequest for EnrollmentRequest {
    fn pattern(&self) -> &'static str {
        match self {
            EnrollmentRequest::GetAssignedCountByCourse(_) => "get_assigned_count_by_course",
            EnrollmentRequest::GetAssignedCountByCourses => "get_assigned_count_by_courses",
            EnrollmentRequest::GetUnassignedCountByCourse => "get_unassigned_count_by_course",
            EnrollmentRequest::GetUniqueStudentCountByCourse(_) => {
                "get_unique_student_count_by_course"
            }
            EnrollmentRequest::GetEnrollments => "get_enrollments",
            EnrollmentRequest::GetEnrollment(_) => "get_enrollment",
            EnrollmentRequest::Create(_) => "create_enrollment",
            EnrollmentRequest::Update { .. } => "update_enrollment",
            EnrollmentRequest::Delete(_) => "delete_enrollment",
            EnrollmentRequest::GetGradesByStudent(_) => "get_grades_by_student",
            EnrollmentRequest::GetGradeByStudentAndCourse { .. } => {
                "get_grade_by_student_and_course"
            }
            EnrollmentRequest::GetAssignedCoursesByStudent(_) => "get_assigned_courses_by_student",
            EnrollmentRequest::GetUnassignedCoursesByStudent(_) => {
                "get_unassigned_courses_by_student"
            }
            EnrollmentRequest::GetAverageGradeByStudent(_) => "get_average_grade_by_student",
            // Channel name as registered by the enrollment service
            EnrollmentRequest::GetAverageGradeByCourse(_) => "ger_average_grade_by_course",
        }
    }

    fn payload(&self) -> Value {
        match self {
            EnrollmentRequest::GetAssignedCountByCourses
            | EnrollmentRequest::GetUnassignedCountByCourse
            | EnrollmentRequest::GetEnrollments => json!({}),
            EnrollmentRequest::GetAssignedCountByCourse(id)
            | EnrollmentRequest::GetUniqueStudentCountByCourse(id)
            | EnrollmentRequest::GetEnrollment(id)
            | EnrollmentRequest::Delete(id)
            | EnrollmentRequest::GetGradesByStudent(id)
            | EnrollmentRequest::GetAssignedCoursesByStudent(id)
            | EnrollmentRequest::GetUnassignedCoursesByStudent(id)
            | EnrollmentRequest::GetAverageGradeByStudent(id)
            | EnrollmentRequest::GetAverageGradeByCourse(id) => json!(id),
            EnrollmentRequest::Create(enrollment) => json!(enrollment),
            EnrollmentRequest::Update { id, data } => json!({ "id": id, "data": data }),
            EnrollmentRequest::GetGradeByStudentAndCourse {
                student_id,
                course_id,
            } => json!({ "studentId": student_id, "courseId": course_id }),
        }
    }
}

/// The service answers a grade lookup with a plain message when the student
/// is not enrolled in the course.
#[derive(Deserialize)]
#[serde(untagged)]
enum GradeLookup {
    Found(CourseGrade),
    Missing(String),
}

/// [`EnrollmentClient`] over a message transport.
pub struct RemoteEnrollmentClient {
    transport: Arc<dyn ServiceTransport>,
}

impl RemoteEnrollmentClient {
    pub fn new(transport: Arc<dyn ServiceTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl EnrollmentClient for RemoteEnrollmentClient {
    #[instrument(skip(self))]
    async fn get_assigned_count_by_course(&self, course_id: i32) -> Result<i64, ServiceError> {
        call(
            self.transport.as_ref(),
            EnrollmentRequest::GetAssignedCountByCourse(course_id),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn get_assigned_count_by_courses(&self) -> Result<Vec<CourseCount>, ServiceError> {
        call(
            self.transport.as_ref(),
            EnrollmentRequest::GetAssignedCountByCourses,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn get_unassigned_count_by_course(&self) -> Result<Vec<CourseCount>, ServiceError> {
        call(
            self.transport.as_ref(),
            EnrollmentRequest::GetUnassignedCountByCourse,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn get_unique_student_count_by_course(&self, course_id: i32) -> Result<i64, ServiceError> {
        call(
            self.transport.as_ref(),
            EnrollmentRequest::GetUniqueStudentCountByCourse(course_id),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn get_enrollments(&self) -> Result<Vec<Enrollment>, ServiceError> {
        call(self.transport.as_ref(), EnrollmentRequest::GetEnrollments).await
    }

    #[instrument(skip(self))]
    async fn get_enrollment(&self, id: i32) -> Result<Option<Enrollment>, ServiceError> {
        call(self.transport.as_ref(), EnrollmentRequest::GetEnrollment(id)).await
    }

    #[instrument(skip(self, enrollment))]
    async fn create_enrollment(&self, enrollment: NewEnrollment) -> Result<Enrollment, ServiceError> {
        call(self.transport.as_ref(), EnrollmentRequest::Create(enrollment)).await
    }

    #[instrument(skip(self, changes))]
    async fn update_enrollment(
        &self,
        id: i32,
        changes: EnrollmentChanges,
    ) -> Result<Enrollment, ServiceError> {
        call(
            self.transport.as_ref(),
            EnrollmentRequest::Update { id, data: changes },
        )
        .await
    }

    #[instrument(skip(self))]
    async fn delete_enrollment(&self, id: i32) -> Result<Enrollment, ServiceError> {
        call(self.transport.as_ref(), EnrollmentRequest::Delete(id)).await
    }

    #[instrument(skip(self))]
    async fn get_grades_by_student(&self, student_id: i32) -> Result<Vec<CourseGrade>, ServiceError> {
        call(
            self.transport.as_ref(),
            EnrollmentRequest::GetGradesByStudent(student_id),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn get_grade_by_student_and_course(
        &self,
        student_id: i32,
        course_id: i32,
    ) -> Result<Option<CourseGrade>, ServiceError> {
        let lookup: Option<GradeLookup> = call(
            self.transport.as_ref(),
            EnrollmentRequest::GetGradeByStudentAndCourse {
                student_id,
                course_id,
            },
        )
        .await?;

        Ok(match lookup {
            Some(GradeLookup::Found(grade)) => Some(grade),
            Some(GradeLookup::Missing(_)) | None => None,
        })
    }

    #[instrument(skip(self))]
    async fn get_assigned_courses_by_student(&self, student_id: i32) -> Result<Vec<i32>, ServiceError> {
        call(
            self.transport.as_ref(),
            EnrollmentRequest::GetAssignedCoursesByStudent(student_id),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn get_unassigned_courses_by_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<i32>, ServiceError> {
        call(
            self.transport.as_ref(),
            EnrollmentRequest::GetUnassignedCoursesByStudent(student_id),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn get_average_grade_by_student(&self, student_id: i32) -> Result<Option<f64>, ServiceError> {
        call(
            self.transport.as_ref(),
            EnrollmentRequest::GetAverageGradeByStudent(student_id),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn get_average_grade_by_course(&self, course_id: i32) -> Result<Option<f64>, ServiceError> {
        call(
            self.transport.as_ref(),
            EnrollmentRequest::GetAverageGradeByCourse(course_id),
        )
        .await
    }
}
