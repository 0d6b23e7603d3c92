//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod health;
pub mod course;
pub mod enrollment;
pub mod grade;
pub mod student;
pub mod stats;
