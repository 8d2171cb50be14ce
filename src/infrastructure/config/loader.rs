use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::{Figment, Provider};
use ini::{Ini, ParseOption};
use serde::Deserialize;
use tracing::debug;

use crate::domain::error::{ConfigError, ConfigResult};
use crate::domain::models::settings::{RawSettings, SECTION};

/// Prefix the CLI uses for environment overrides (`DANDERE2X_WORKSPACE`, ...).
pub const DEFAULT_ENV_PREFIX: &str = "DANDERE2X_";

/// A scalar as it appears in the source, before it is flattened to text.
///
/// TOML and YAML type bare numbers, booleans and times; the resolver works on
/// text only, so every scalar is turned back into its string form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Datetime(toml::value::Datetime),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Integer(value) => value.to_string(),
            // `15.0` stays `15.0`, not `15`.
            Self::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                format!("{value:.1}")
            }
            Self::Float(value) => value.to_string(),
            Self::Boolean(value) => value.to_string(),
            Self::Datetime(value) => value.to_string(),
        }
    }
}

/// Source format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// `key = value` sections with unquoted, verbatim values.
    Ini,
    Toml,
    Yaml,
}

impl SourceFormat {
    /// `.toml` is TOML, `.yaml`/`.yml` are YAML; everything else is read as INI.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => Self::Toml,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Ini,
        }
    }
}

/// Reads the `[dandere2x]` section of a configuration source.
///
/// Precedence (lowest to highest):
/// 1. The source file
/// 2. Environment variables (`<prefix><KEY>`), only when a prefix is set
///
/// INI values and environment values are taken verbatim.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    section: String,
    env_prefix: Option<String>,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self {
            section: SECTION.to_string(),
            env_prefix: None,
        }
    }
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow `<prefix><KEY>` environment variables to override section values.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    pub fn env_prefix(&self) -> Option<&str> {
        self.env_prefix.as_deref()
    }

    /// Load raw settings from `path`.
    pub fn load(&self, path: impl AsRef<Path>) -> ConfigResult<RawSettings> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let format = SourceFormat::from_path(path);
        debug!(path = %path.display(), ?format, "loading configuration source");

        let malformed = |reason: String| ConfigError::Malformed {
            path: path.to_path_buf(),
            reason,
        };

        let mut figment = match format {
            SourceFormat::Ini => Figment::from(Serialized::defaults(
                ini_sections(&contents).map_err(malformed)?,
            )),
            SourceFormat::Toml => Figment::from(Toml::string(&contents)),
            SourceFormat::Yaml => Figment::from(Yaml::string(&contents)),
        };

        if let Some(prefix) = &self.env_prefix {
            let overrides = env_overrides(prefix);
            if !overrides.is_empty() {
                debug!(prefix = %prefix, count = overrides.len(), "applying environment overrides");
                figment = figment.merge(Serialized::default(&self.section, overrides));
            }
        }

        // Surface syntax errors before looking for the section.
        figment.data().map_err(|err| malformed(err.to_string()))?;

        if figment.find_value(&self.section).is_err() {
            return Err(ConfigError::MissingSection {
                path: path.to_path_buf(),
                section: self.section.clone(),
            });
        }

        let scalars: BTreeMap<String, Scalar> =
            figment.extract_inner(&self.section).map_err(|err| {
                malformed(format!(
                    "section [{}] must hold only scalar values: {err}",
                    self.section
                ))
            })?;

        let values = scalars
            .into_iter()
            .map(|(key, value)| (key, value.into_text()))
            .collect();

        RawSettings::new(self.section.clone(), values)
    }
}

/// Every named section of an INI document, keys lowercased, values verbatim.
fn ini_sections(contents: &str) -> Result<BTreeMap<String, BTreeMap<String, String>>, String> {
    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };
    let document = Ini::load_from_str_opt(contents, options).map_err(|err| err.to_string())?;

    let mut sections: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
    for (name, properties) in document.iter() {
        let Some(name) = name else { continue };
        let section = sections.entry(name.to_string()).or_default();
        for (key, value) in properties.iter() {
            section.insert(key.to_ascii_lowercase(), value.to_string());
        }
    }
    Ok(sections)
}

/// `<prefix><KEY>` variables as lowercase keys with their text untouched.
fn env_overrides(prefix: &str) -> BTreeMap<String, String> {
    let env = Env::prefixed(prefix);
    let overrides = env
        .iter()
        .map(|(key, value)| (key.as_str().to_ascii_lowercase(), value))
        .collect();
    overrides
}
