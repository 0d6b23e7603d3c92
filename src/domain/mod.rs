//! # Domain Layer
//!
//! Entities read from the data services, the client traits used to reach
//! them, and the derived views the gateway computes from them.
//!
//! ## Structure
//!
//! - **entities**: Course, Enrollment, Student and their client traits
//! - **value_objects**: Derived per-request views (seats, summaries, stats)
//! - **services**: Pure derivation rules over enrollment aggregates
//! - **errors**: Remote call failures
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Client traits define the remote contracts; transports implement them
//! - Nothing here is persisted by the gateway

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use errors::ServiceError;
pub use value_objects::*;
