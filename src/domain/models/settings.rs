use std::collections::BTreeMap;

use crate::domain::error::{ConfigError, ConfigResult};

/// Section holding every dandere2x setting.
pub const SECTION: &str = "dandere2x";

/// Marker replaced with the installation directory in installation-relative paths.
pub const PLACEHOLDER: &str = "[this]";

/// Every key the section must define, in canonical order.
pub const REQUIRED_KEYS: &[&str] = &[
    "waifu2x_caffe_cui_dir",
    "model_dir",
    "workspace",
    "dandere2x_cpp_dir",
    "ffmpeg_dir",
    "file_dir",
    "waifu2x_type",
    "waifu2x_conv_dir",
    "waifu2x_conv_dir_dir",
    "dandere_dir",
    "time_frame",
    "duration",
    "audio_layer",
    "frame_rate",
    "width",
    "height",
    "block_size",
    "tolerance",
    "step_size",
    "bleed",
    "quality_low",
    "quality_high",
    "noise_level",
    "scale_factor",
    "process_type",
    "extension_type",
    "audio_type",
];

/// Keys whose `[this]` markers are substituted. No other key is touched.
pub const SUBSTITUTED_KEYS: &[&str] = &[
    "waifu2x_caffe_cui_dir",
    "model_dir",
    "workspace",
    "dandere2x_cpp_dir",
    "ffmpeg_dir",
    "file_dir",
];

/// Text key/value pairs read from one section of a configuration source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSettings {
    section: String,
    values: BTreeMap<String, String>,
}

impl RawSettings {
    /// Build raw settings, failing on the first required key (in canonical
    /// order) that is absent.
    pub fn new(section: impl Into<String>, values: BTreeMap<String, String>) -> ConfigResult<Self> {
        let section = section.into();
        if let Some(missing) = REQUIRED_KEYS.iter().find(|key| !values.contains_key(**key)) {
            return Err(ConfigError::MissingKey {
                section,
                key: (*missing).to_string(),
            });
        }
        Ok(Self { section, values })
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Fetch a key, reporting it as missing when absent.
    pub fn require(&self, key: &str) -> ConfigResult<&str> {
        self.get(key).ok_or_else(|| ConfigError::MissingKey {
            section: self.section.clone(),
            key: key.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> BTreeMap<String, String> {
        REQUIRED_KEYS
            .iter()
            .map(|key| ((*key).to_string(), "value".to_string()))
            .collect()
    }

    #[test]
    fn test_complete_settings_accepted() {
        let raw = RawSettings::new(SECTION, complete()).unwrap();
        assert_eq!(raw.section(), "dandere2x");
        assert_eq!(raw.len(), REQUIRED_KEYS.len());
        assert_eq!(raw.require("workspace").unwrap(), "value");
    }

    #[test]
    fn test_first_missing_key_reported() {
        let mut values = complete();
        values.remove("quality_high");
        values.remove("tolerance");

        match RawSettings::new(SECTION, values).unwrap_err() {
            ConfigError::MissingKey { section, key } => {
                assert_eq!(section, "dandere2x");
                assert_eq!(key, "tolerance");
            }
            other => panic!("Expected MissingKey, got {other:?}"),
        }
    }

    #[test]
    fn test_extra_keys_are_kept() {
        let mut values = complete();
        values.insert("comment".to_string(), "ignored".to_string());
        let raw = RawSettings::new(SECTION, values).unwrap();
        assert_eq!(raw.get("comment"), Some("ignored"));
    }

    #[test]
    fn test_substituted_keys_are_required() {
        for key in SUBSTITUTED_KEYS {
            assert!(REQUIRED_KEYS.contains(key), "{key} should be required");
        }
    }
}
