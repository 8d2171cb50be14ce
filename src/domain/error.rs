//! Domain errors for configuration resolution.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Broad classification of a [`ConfigError`].
///
/// `Load` covers everything that prevents raw settings from being read
/// (unreadable or malformed source, missing section or key, no installation
/// directory). `Type` covers values that were present but could not be coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigErrorKind {
    Load,
    Type,
}

impl ConfigErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Type => "type",
        }
    }
}

impl std::fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while resolving a configuration source.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration source {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse configuration source {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("Configuration source {} has no [{section}] section", path.display())]
    MissingSection { path: PathBuf, section: String },

    #[error("Missing required key '{key}' in section [{section}]")]
    MissingKey { section: String, key: String },

    #[error("Invalid value for '{key}': {value:?} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Cannot determine installation directory: {0}")]
    InstallDir(#[source] io::Error),
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this is a load failure or a type failure.
    pub const fn kind(&self) -> ConfigErrorKind {
        match self {
            Self::InvalidValue { .. } => ConfigErrorKind::Type,
            Self::Unreadable { .. }
            | Self::Malformed { .. }
            | Self::MissingSection { .. }
            | Self::MissingKey { .. }
            | Self::InstallDir(_) => ConfigErrorKind::Load,
        }
    }

    /// The offending key, when the failure is attributable to one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MissingKey { key, .. } | Self::InvalidValue { key, .. } => Some(key),
            _ => None,
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
