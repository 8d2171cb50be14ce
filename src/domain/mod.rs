//! Domain layer for dandere2x configuration
//!
//! This module contains the configuration models and their error types.

pub mod error;
pub mod models;

// Re-export error types for convenient access
pub use error::{ConfigError, ConfigErrorKind, ConfigResult};
