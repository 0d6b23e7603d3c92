//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! - **AvailableSeats**: capacity minus assigned enrollments for a course
//! - **CourseEnrollmentSummary**: distinct students per course
//! - **CourseCountWithName**: per-course count joined with the course name
//! - **DashboardStats**: dashboard counters and top courses
//! - **StudentAverageGrade** / **CourseAverageGrade**: mean final grades

mod stats;

pub use stats::*;
