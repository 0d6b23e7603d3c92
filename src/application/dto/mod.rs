//! Data Transfer Objects
//!
//! DTOs for API request deserialization and validation. Responses are the
//! domain entities and derived views, which serialize directly.

pub mod request;
