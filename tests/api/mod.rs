//! HTTP endpoint tests

mod enrollment_tests;
mod health_tests;
mod stats_tests;
mod student_tests;
