//! HTTP Endpoint Layer
//!
//! Decodes requests, calls a client or the aggregator, encodes the response.

pub mod extractors;
pub mod handlers;
pub mod routes;
