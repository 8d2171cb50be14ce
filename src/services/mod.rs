//! Service layer
//!
//! Resolution of configuration sources and preparation of the workspace the
//! resolved configuration describes.

pub mod config_resolver;
pub mod workspace;

pub use config_resolver::ConfigResolver;
pub use workspace::{planned_directories, prepare_workspace};
