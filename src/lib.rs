//! # Enrollment Gateway Library
//!
//! This crate provides the API gateway of a student-management system:
//! - RESTful HTTP endpoints for courses, enrollments and students
//! - Aggregated views combining several data services (available seats,
//!   available courses, enrollment summaries, dashboard statistics)
//! - A Redis request/reply transport to the data services
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Entities, client traits and derived views
//! - **Application Layer**: Aggregation service and request DTOs
//! - **Infrastructure Layer**: Redis transport, remote clients, metrics
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! enrollment_gateway/
//! +-- config/         Configuration management
//! +-- domain/         Entities, client traits, derived views
//! +-- application/    Aggregation service and DTOs
//! +-- infrastructure/ Transport, clients and metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, validation, fan-out)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
