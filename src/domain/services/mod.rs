//! # Domain Services
//!
//! Pure business rules that span several entities.
//!
//! ## Services
//!
//! - **EnrollmentStatsService**: sums, name joins and rankings over
//!   per-course enrollment counts

mod enrollment_stats;

pub use enrollment_stats::*;
