//! Aggregation Service
//!
//! Combines answers from the course, enrollment and student services into
//! derived views. Every operation is read-only and stateless: independent
//! calls are fanned out concurrently, dependent calls are sequenced, and the
//! first failing call aborts the whole operation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::config::AggregatorSettings;
use crate::domain::services::EnrollmentStatsService;
use crate::domain::{
    AvailableSeats, Course, CourseClient, CourseCountWithName, CourseEnrollmentSummary,
    DashboardStats, EnrollmentClient, ServiceError, StudentClient,
};
use crate::shared::fan_out::join_barrier;

/// Aggregation service trait
#[async_trait]
pub trait AggregatorService: Send + Sync {
    /// Capacity minus assigned enrollments for one course (may be negative)
    async fn available_seats(&self, course_id: i32) -> Result<AvailableSeats, AggregateError>;

    /// Courses that still have a free seat, in course-list order
    async fn available_courses(&self) -> Result<Vec<Course>, AggregateError>;

    /// Distinct students per course, in course-list order
    async fn course_enrollment_summary(&self) -> Result<Vec<CourseEnrollmentSummary>, AggregateError>;

    /// Assigned counts per course joined with course names
    async fn assigned_counts_with_names(&self) -> Result<Vec<CourseCountWithName>, AggregateError>;

    /// Dashboard counters and top courses
    async fn dashboard_stats(&self) -> Result<DashboardStats, AggregateError>;
}

/// Aggregation errors
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Tuning for the aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregatorConfig {
    pub top_courses_limit: usize,
    pub max_concurrency: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            top_courses_limit: 5,
            max_concurrency: 16,
        }
    }
}

impl From<&AggregatorSettings> for AggregatorConfig {
    fn from(settings: &AggregatorSettings) -> Self {
        Self {
            top_courses_limit: settings.top_courses_limit,
            max_concurrency: settings.max_concurrency,
        }
    }
}

/// AggregatorService implementation
pub struct AggregatorServiceImpl {
    courses: Arc<dyn CourseClient>,
    enrollments: Arc<dyn EnrollmentClient>,
    students: Arc<dyn StudentClient>,
    config: AggregatorConfig,
}

impl AggregatorServiceImpl {
    pub fn new(
        courses: Arc<dyn CourseClient>,
        enrollments: Arc<dyn EnrollmentClient>,
        students: Arc<dyn StudentClient>,
        config: AggregatorConfig,
    ) -> Self {
        Self {
            courses,
            enrollments,
            students,
            config,
        }
    }
}

#[async_trait]
impl AggregatorService for AggregatorServiceImpl {
    #[instrument(skip(self))]
    async fn available_seats(&self, course_id: i32) -> Result<AvailableSeats, AggregateError> {
        let (max_students, assigned) = tokio::try_join!(
            self.courses.get_max_students(course_id),
            self.enrollments.get_assigned_count_by_course(course_id),
        )?;

        let max_students = max_students
            .ok_or_else(|| AggregateError::NotFound(format!("Course {} not found", course_id)))?;

        let available = i64::from(max_students) - assigned;
        debug!(max_students, assigned, available, "Computed available seats");

        Ok(AvailableSeats {
            course_id,
            available,
        })
    }

    #[instrument(skip(self))]
    async fn available_courses(&self) -> Result<Vec<Course>, AggregateError> {
        let courses = self.courses.get_courses().await?;

        let ids: Vec<i32> = courses.iter().map(|c| c.id).collect();
        let assigned = join_barrier(ids, self.config.max_concurrency, |id| {
            self.enrollments.get_assigned_count_by_course(id)
        })
        .await?;

        let available: Vec<Course> = courses
            .into_iter()
            .zip(assigned)
            .filter(|(course, assigned)| course.has_capacity_for(*assigned))
            .map(|(course, _)| course)
            .collect();

        debug!(count = available.len(), "Courses with free seats");
        Ok(available)
    }

    #[instrument(skip(self))]
    async fn course_enrollment_summary(&self) -> Result<Vec<CourseEnrollmentSummary>, AggregateError> {
        let courses = self.courses.get_courses().await?;

        let ids: Vec<i32> = courses.iter().map(|c| c.id).collect();
        let counts = join_barrier(ids, self.config.max_concurrency, |id| {
            self.enrollments.get_unique_student_count_by_course(id)
        })
        .await?;

        Ok(courses
            .into_iter()
            .zip(counts)
            .map(|(course, student_count)| CourseEnrollmentSummary {
                name: course.name,
                student_count,
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn assigned_counts_with_names(&self) -> Result<Vec<CourseCountWithName>, AggregateError> {
        let counts = self.enrollments.get_assigned_count_by_courses().await?;
        if counts.is_empty() {
            return Ok(Vec::new());
        }

        // One batched lookup instead of one call per course.
        let ids = EnrollmentStatsService::distinct_course_ids(&counts);
        let names = self.courses.get_courses_by_ids(ids).await?;

        Ok(EnrollmentStatsService::label_counts(
            &counts,
            names.iter().map(|n| (n.id, n.name.as_str())),
        ))
    }

    #[instrument(skip(self))]
    async fn dashboard_stats(&self) -> Result<DashboardStats, AggregateError> {
        let (students, courses, assigned, unassigned) = tokio::try_join!(
            self.students.get_students(),
            self.courses.get_courses(),
            self.enrollments.get_assigned_count_by_courses(),
            self.enrollments.get_unassigned_count_by_course(),
        )?;

        let named = EnrollmentStatsService::label_counts(
            &assigned,
            courses.iter().map(|c| (c.id, c.name.as_str())),
        );

        Ok(DashboardStats {
            total_students: students.len(),
            total_courses: courses.len(),
            active_enrollments: EnrollmentStatsService::total(&assigned),
            unassigned_requests: EnrollmentStatsService::total(&unassigned),
            top_courses: EnrollmentStatsService::top_courses(named, self.config.top_courses_limit),
        })
    }
}
