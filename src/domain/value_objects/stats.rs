//! Derived views computed per request by the aggregator.
//!
//! None of these are persisted or cached; each is only valid "as of" the
//! request that produced it.

use serde::Serialize;

/// Free seats in one course. Negative when over-enrolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSeats {
    pub course_id: i32,
    pub available: i64,
}

/// Distinct students per course, for the dashboard bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseEnrollmentSummary {
    pub name: String,
    pub student_count: i64,
}

/// A per-course count joined with the course name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCountWithName {
    pub course_id: i32,
    pub course_name: String,
    pub count: i64,
}

/// Dashboard aggregate counters plus the busiest courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_students: usize,
    pub total_courses: usize,
    /// Sum of assigned enrollments over all courses
    pub active_enrollments: i64,
    /// Sum of waitlisted requests over all courses
    pub unassigned_requests: i64,
    pub top_courses: Vec<CourseCountWithName>,
}

/// Mean final grade of one student. `None` while nothing is graded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAverageGrade {
    pub student_id: i32,
    pub average_grade: Option<f64>,
}

/// Mean final grade in one course. `None` while nothing is graded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseAverageGrade {
    pub course_id: i32,
    pub average_grade: Option<f64>,
}
