use std::env;
use std::fmt;
use std::io;
use std::path::{self, Path, MAIN_SEPARATOR};

use crate::domain::error::{ConfigError, ConfigResult};

/// Directory that `[this]` expands to, always ending in a path separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallDir(String);

impl InstallDir {
    /// Use an explicit directory. Relative paths are taken from the current
    /// directory, and a trailing separator is appended when absent.
    pub fn new(dir: impl AsRef<Path>) -> ConfigResult<Self> {
        let dir = path::absolute(dir.as_ref()).map_err(ConfigError::InstallDir)?;
        Ok(Self::from_absolute(&dir))
    }

    fn from_absolute(dir: &Path) -> Self {
        let mut text = dir.to_string_lossy().into_owned();
        if !text.ends_with(MAIN_SEPARATOR) {
            text.push(MAIN_SEPARATOR);
        }
        Self(text)
    }

    /// Directory containing the running executable, with symlinks resolved.
    pub fn detect() -> ConfigResult<Self> {
        let exe = env::current_exe()
            .and_then(|exe| exe.canonicalize())
            .map_err(ConfigError::InstallDir)?;
        let parent = exe.parent().ok_or_else(|| {
            ConfigError::InstallDir(io::Error::new(
                io::ErrorKind::NotFound,
                format!("executable {} has no parent directory", exe.display()),
            ))
        })?;
        Ok(Self::from_absolute(parent))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstallDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
