//! # Configuration Module
//!
//! This module handles application configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use enrollment_gateway::config::Settings;
//!
//! let settings = Settings::load()?;
//! let addr = settings.server.socket_addr()?;
//! ```

mod settings;

pub use settings::*;
