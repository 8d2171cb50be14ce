//! Infrastructure layer module
//!
//! This module contains the adapters that touch the outside world:
//! - Configuration source loading (figment)
//! - Installation directory discovery
//! - Logging infrastructure

pub mod config;
pub mod logging;
