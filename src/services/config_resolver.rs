//! Resolution of a configuration source into a [`ResolvedConfig`].
//!
//! Resolution is a single linear pass: load raw settings, substitute `[this]`
//! in installation-relative paths, coerce numeric settings, derive workspace
//! sub-paths and the frame count, then pin `bleed`. Any failure aborts the
//! whole pass; no partially populated configuration is ever returned.

use std::path::Path;

use tracing::{debug, info, warn, Dispatch};

use crate::domain::error::{ConfigError, ConfigResult};
use crate::domain::models::settings::{RawSettings, PLACEHOLDER, SUBSTITUTED_KEYS};
use crate::domain::models::timecode::parse_timecode;
use crate::domain::models::{
    PathSettings, ResolvedConfig, UpscaleSettings, UserSettings, WorkspaceLayout, BLEED_OVERRIDE,
};
use crate::infrastructure::config::{InstallDir, SettingsLoader};
use crate::infrastructure::logging::Logger;

/// Turns configuration sources into [`ResolvedConfig`] values.
#[derive(Clone)]
pub struct ConfigResolver {
    install_dir: InstallDir,
    loader: SettingsLoader,
    dispatch: Option<Dispatch>,
}

impl ConfigResolver {
    /// Resolver whose `[this]` is the directory of the running executable.
    pub fn new() -> ConfigResult<Self> {
        Ok(Self::with_install_dir(InstallDir::detect()?))
    }

    /// Resolver with an explicit installation directory.
    pub fn with_install_dir(install_dir: InstallDir) -> Self {
        Self {
            install_dir,
            loader: SettingsLoader::new(),
            dispatch: None,
        }
    }

    /// Let `<prefix><KEY>` environment variables override the source.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.loader = self.loader.with_env_prefix(prefix);
        self
    }

    /// Log through `logger` instead of whatever default is current.
    #[must_use]
    pub fn with_logger(mut self, logger: &Logger) -> Self {
        self.dispatch = Some(logger.dispatch().clone());
        self
    }

    pub const fn install_dir(&self) -> &InstallDir {
        &self.install_dir
    }

    /// Load `source` and resolve it.
    pub fn resolve(&self, source: impl AsRef<Path>) -> ConfigResult<ResolvedConfig> {
        let source = source.as_ref();
        self.in_scope(|| {
            info!(source = %source.display(), install_dir = %self.install_dir, "resolving configuration");
            let raw = self.loader.load(source)?;
            self.resolve_raw(&raw)
        })
    }

    /// Resolve settings that were already loaded.
    pub fn resolve_settings(&self, raw: &RawSettings) -> ConfigResult<ResolvedConfig> {
        self.in_scope(|| self.resolve_raw(raw))
    }

    fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        match &self.dispatch {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, f),
            None => f(),
        }
    }

    fn resolve_raw(&self, raw: &RawSettings) -> ConfigResult<ResolvedConfig> {
        let paths = PathSettings {
            waifu2x_caffe_cui_dir: self.substituted(raw, "waifu2x_caffe_cui_dir")?,
            model_dir: self.substituted(raw, "model_dir")?,
            workspace: self.substituted(raw, "workspace")?,
            dandere2x_cpp_dir: self.substituted(raw, "dandere2x_cpp_dir")?,
            ffmpeg_dir: self.substituted(raw, "ffmpeg_dir")?,
            file_dir: self.substituted(raw, "file_dir")?,
            waifu2x_conv_dir: text(raw, "waifu2x_conv_dir")?,
            waifu2x_conv_dir_dir: text(raw, "waifu2x_conv_dir_dir")?,
            dandere_dir: text(raw, "dandere_dir")?,
        };

        let user = UserSettings {
            time_frame: text(raw, "time_frame")?,
            duration: text(raw, "duration")?,
            audio_layer: text(raw, "audio_layer")?,
            frame_rate: text(raw, "frame_rate")?,
            width: text(raw, "width")?,
            height: text(raw, "height")?,
            block_size: integer(raw, "block_size")?,
            tolerance: text(raw, "tolerance")?,
            step_size: text(raw, "step_size")?,
            // Required, but the configured value is ignored.
            bleed: {
                raw.require("bleed")?;
                BLEED_OVERRIDE
            },
            quality_low: integer(raw, "quality_low")?,
            quality_high: integer(raw, "quality_high")?,
        };

        let upscale = UpscaleSettings {
            waifu2x_type: raw.require("waifu2x_type")?.into(),
            noise_level: text(raw, "noise_level")?,
            scale_factor: text(raw, "scale_factor")?,
            process_type: raw.require("process_type")?.into(),
            extension_type: raw.require("extension_type")?.into(),
            audio_type: raw.require("audio_type")?.into(),
        };

        let workspace = WorkspaceLayout::under(&paths.workspace);
        let frame_count = frame_count(&user.duration, &user.frame_rate)?;

        let config = ResolvedConfig::new(
            self.install_dir.as_str().to_string(),
            paths,
            user,
            upscale,
            workspace,
            frame_count,
        );

        for (key, value) in config.unknown_kinds() {
            warn!(key, value, "unrecognised value, passing it through unchanged");
        }
        for (key, value) in config.entries() {
            debug!(key, %value, "resolved");
        }
        info!(
            workspace = config.workspace_root(),
            frame_count = config.frame_count(),
            "configuration resolved"
        );

        Ok(config)
    }

    /// Value of `key` with every `[this]` replaced by the installation directory.
    fn substituted(&self, raw: &RawSettings, key: &str) -> ConfigResult<String> {
        debug_assert!(SUBSTITUTED_KEYS.contains(&key));
        let value = raw.require(key)?;
        if !value.contains(PLACEHOLDER) {
            return Ok(value.to_string());
        }
        let resolved = value.replace(PLACEHOLDER, self.install_dir.as_str());
        debug!(key, from = value, to = %resolved, "substituted installation directory");
        Ok(resolved)
    }
}

fn text(raw: &RawSettings, key: &str) -> ConfigResult<String> {
    raw.require(key).map(str::to_string)
}

fn integer(raw: &RawSettings, key: &str) -> ConfigResult<i64> {
    let value = raw.require(key)?;
    value
        .trim()
        .parse()
        .map_err(|err| ConfigError::invalid(key, value, format!("expected an integer: {err}")))
}

/// `seconds(duration) * frame_rate`, both parsed strictly.
fn frame_count(duration: &str, frame_rate: &str) -> ConfigResult<u64> {
    let seconds = parse_timecode(duration)
        .map_err(|err| ConfigError::invalid("duration", duration, err.to_string()))?;

    let trimmed = frame_rate.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::invalid(
            "frame_rate",
            frame_rate,
            "expected a non-negative whole number",
        ));
    }
    let rate: u64 = trimmed
        .parse()
        .map_err(|err| ConfigError::invalid("frame_rate", frame_rate, format!("{err}")))?;

    seconds
        .checked_mul(rate)
        .ok_or_else(|| ConfigError::invalid("frame_rate", frame_rate, "frame count overflows"))
}
