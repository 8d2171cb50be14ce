use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name written inside [`LogConfig::log_dir`].
pub const LOG_FILE_NAME: &str = "dandere2x.log";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output format (json, pretty). The log file is always JSON.
    #[serde(default = "default_format")]
    pub format: LogFormat,

    /// Directory for `dandere2x.log` (if None, no file is written)
    pub log_dir: Option<PathBuf>,

    /// Mirror log events to stderr
    #[serde(default)]
    pub enable_console: bool,

    /// Log file rotation policy
    #[serde(default)]
    pub rotation: RotationPolicy,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    Daily,
    Hourly,
    #[default]
    Never,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            log_dir: Some(PathBuf::from(".")),
            enable_console: false,
            rotation: RotationPolicy::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

const fn default_format() -> LogFormat {
    LogFormat::Pretty
}
