//! dandere2x - configuration resolution for the dandere2x upscaling pipeline
//!
//! A single configuration source is resolved into an immutable
//! [`ResolvedConfig`] that frame extraction, block matching, upscaling and
//! reassembly all read without parsing configuration themselves.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): settings models, closed setting kinds, errors
//! - **Service Layer** (`services`): the resolver and workspace preparation
//! - **Infrastructure Layer** (`infrastructure`): source loading, install
//!   directory discovery, logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use dandere2x::infrastructure::logging::{LogConfig, Logger};
//! use dandere2x::services::ConfigResolver;
//!
//! fn main() -> anyhow::Result<()> {
//!     let logger = Logger::init(&LogConfig::default())?;
//!     let config = ConfigResolver::new()?
//!         .with_logger(&logger)
//!         .resolve("config.toml")?;
//!     println!("{} frames", config.frame_count());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    AudioType, ExtensionType, PathSettings, ProcessType, RawSettings, ResolvedConfig,
    UpscaleSettings, UserSettings, Waifu2xType, WorkspaceLayout,
};
pub use domain::{ConfigError, ConfigErrorKind, ConfigResult};
pub use infrastructure::config::{InstallDir, SettingsLoader};
pub use infrastructure::logging::{LogConfig, Logger};
pub use services::ConfigResolver;
