//! Configuration source infrastructure
//!
//! Reading configuration sources using figment:
//! - INI (via rust-ini), TOML or YAML file loading
//! - Environment variable overrides
//! - Installation directory discovery

pub mod install_dir;
pub mod loader;

pub use install_dir::InstallDir;
pub use loader::{SettingsLoader, SourceFormat, DEFAULT_ENV_PREFIX};
