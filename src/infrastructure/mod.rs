//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - The Redis request/reply transport to the data services
//! - Typed clients for the course, enrollment and student services
//! - Prometheus metrics

pub mod clients;
pub mod messaging;
pub mod metrics;
