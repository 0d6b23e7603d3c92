//! Application Layer
//!
//! Contains the aggregation service and the request DTOs. This layer
//! orchestrates the flow of data between the presentation layer and the
//! data service clients.

pub mod services;
pub mod dto;
