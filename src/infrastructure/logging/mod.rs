//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON log file (`dandere2x.log`)
//! - Optional console output
//! - Explicit dispatcher injection instead of implicit global setup
pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat, RotationPolicy, LOG_FILE_NAME};
pub use logger::Logger;
