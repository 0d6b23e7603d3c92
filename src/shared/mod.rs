//! Shared Utilities
//!
//! Common utilities used across all layers.

pub mod error;
pub mod fan_out;
pub mod validation;
