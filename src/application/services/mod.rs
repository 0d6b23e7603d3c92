//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **AggregatorService**: Cross-service views (available seats, available
//!   courses, enrollment summaries, dashboard statistics)

pub mod aggregator_service;

pub use aggregator_service::{
    AggregateError, AggregatorConfig, AggregatorService, AggregatorServiceImpl,
};
