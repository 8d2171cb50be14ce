use std::path::MAIN_SEPARATOR;

use serde::Serialize;

use super::kinds::{AudioType, ExtensionType, ProcessType, Waifu2xType};

/// Value `bleed` is pinned to regardless of what the source configures.
pub const BLEED_OVERRIDE: u32 = 1;

/// Locations of external tools and working data.
///
/// The first six fields have `[this]` resolved to the installation directory;
/// `waifu2x_conv_dir`, `waifu2x_conv_dir_dir` and `dandere_dir` are verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathSettings {
    pub waifu2x_caffe_cui_dir: String,
    pub model_dir: String,
    pub workspace: String,
    pub dandere2x_cpp_dir: String,
    pub ffmpeg_dir: String,
    pub file_dir: String,
    pub waifu2x_conv_dir: String,
    pub waifu2x_conv_dir_dir: String,
    pub dandere_dir: String,
}

/// Per-run settings chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSettings {
    pub time_frame: String,
    pub duration: String,
    pub audio_layer: String,
    pub frame_rate: String,
    pub width: String,
    pub height: String,
    pub block_size: i64,
    pub tolerance: String,
    pub step_size: String,
    /// Always [`BLEED_OVERRIDE`].
    pub bleed: u32,
    pub quality_low: i64,
    pub quality_high: i64,
}

/// Settings handed to the upscaling engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpscaleSettings {
    pub waifu2x_type: Waifu2xType,
    pub noise_level: String,
    pub scale_factor: String,
    pub process_type: ProcessType,
    pub extension_type: ExtensionType,
    pub audio_type: AudioType,
}

/// Working directories derived from the workspace root.
///
/// Every entry is `workspace + name + MAIN_SEPARATOR`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceLayout {
    pub inputs: String,
    pub differences: String,
    pub upscaled: String,
    pub correction_data: String,
    pub merged: String,
    pub inversion_data: String,
    pub pframe_data: String,
    pub debug: String,
    pub logs: String,
}

impl WorkspaceLayout {
    /// Sub-directory names, in layout order.
    pub const NAMES: [&'static str; 9] = [
        "inputs",
        "differences",
        "upscaled",
        "correction_data",
        "merged",
        "inversion_data",
        "pframe_data",
        "debug",
        "logs",
    ];

    pub fn under(workspace: &str) -> Self {
        let sub = |name: &str| format!("{workspace}{name}{MAIN_SEPARATOR}");
        Self {
            inputs: sub("inputs"),
            differences: sub("differences"),
            upscaled: sub("upscaled"),
            correction_data: sub("correction_data"),
            merged: sub("merged"),
            inversion_data: sub("inversion_data"),
            pframe_data: sub("pframe_data"),
            debug: sub("debug"),
            logs: sub("logs"),
        }
    }

    /// `(name, path)` pairs in [`Self::NAMES`] order.
    pub fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("inputs", self.inputs.as_str()),
            ("differences", self.differences.as_str()),
            ("upscaled", self.upscaled.as_str()),
            ("correction_data", self.correction_data.as_str()),
            ("merged", self.merged.as_str()),
            ("inversion_data", self.inversion_data.as_str()),
            ("pframe_data", self.pframe_data.as_str()),
            ("debug", self.debug.as_str()),
            ("logs", self.logs.as_str()),
        ]
    }
}

/// Fully resolved, read-only runtime configuration.
///
/// Only [`ConfigResolver`](crate::services::ConfigResolver) builds one; it has
/// no setters, so a shared `&ResolvedConfig` (or `Arc`) is safe to hand to any
/// number of threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    install_dir: String,
    paths: PathSettings,
    user: UserSettings,
    upscale: UpscaleSettings,
    workspace: WorkspaceLayout,
    frame_count: u64,
}

impl ResolvedConfig {
    pub(crate) const fn new(
        install_dir: String,
        paths: PathSettings,
        user: UserSettings,
        upscale: UpscaleSettings,
        workspace: WorkspaceLayout,
        frame_count: u64,
    ) -> Self {
        Self {
            install_dir,
            paths,
            user,
            upscale,
            workspace,
            frame_count,
        }
    }

    /// Installation directory `[this]` was resolved against.
    pub fn install_dir(&self) -> &str {
        &self.install_dir
    }

    pub const fn paths(&self) -> &PathSettings {
        &self.paths
    }

    pub const fn user(&self) -> &UserSettings {
        &self.user
    }

    pub const fn upscale(&self) -> &UpscaleSettings {
        &self.upscale
    }

    pub const fn workspace(&self) -> &WorkspaceLayout {
        &self.workspace
    }

    /// Workspace root (shorthand for `paths().workspace`).
    pub fn workspace_root(&self) -> &str {
        &self.paths.workspace
    }

    /// `seconds(duration) * frame_rate`.
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Every resolved setting as `(key, value)` text, grouped as paths, user,
    /// upscale, derived.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let p = &self.paths;
        let u = &self.user;
        let w = &self.upscale;

        let mut entries = vec![
            ("waifu2x_caffe_cui_dir", p.waifu2x_caffe_cui_dir.clone()),
            ("model_dir", p.model_dir.clone()),
            ("workspace", p.workspace.clone()),
            ("dandere2x_cpp_dir", p.dandere2x_cpp_dir.clone()),
            ("ffmpeg_dir", p.ffmpeg_dir.clone()),
            ("file_dir", p.file_dir.clone()),
            ("waifu2x_conv_dir", p.waifu2x_conv_dir.clone()),
            ("waifu2x_conv_dir_dir", p.waifu2x_conv_dir_dir.clone()),
            ("dandere_dir", p.dandere_dir.clone()),
            ("time_frame", u.time_frame.clone()),
            ("duration", u.duration.clone()),
            ("audio_layer", u.audio_layer.clone()),
            ("frame_rate", u.frame_rate.clone()),
            ("width", u.width.clone()),
            ("height", u.height.clone()),
            ("block_size", u.block_size.to_string()),
            ("tolerance", u.tolerance.clone()),
            ("step_size", u.step_size.clone()),
            ("bleed", u.bleed.to_string()),
            ("quality_low", u.quality_low.to_string()),
            ("quality_high", u.quality_high.to_string()),
            ("waifu2x_type", w.waifu2x_type.to_string()),
            ("noise_level", w.noise_level.clone()),
            ("scale_factor", w.scale_factor.clone()),
            ("process_type", w.process_type.to_string()),
            ("extension_type", w.extension_type.to_string()),
            ("audio_type", w.audio_type.to_string()),
        ];
        entries.extend(
            self.workspace
                .entries()
                .into_iter()
                .map(|(name, path)| (name, path.to_string())),
        );
        entries.push(("frame_count", self.frame_count.to_string()));
        entries
    }

    /// Names of enum-like settings whose text matched no known variant.
    pub fn unknown_kinds(&self) -> Vec<(&'static str, &str)> {
        let w = &self.upscale;
        let mut unknown = Vec::new();
        if !w.waifu2x_type.is_known() {
            unknown.push(("waifu2x_type", w.waifu2x_type.as_str()));
        }
        if !w.process_type.is_known() {
            unknown.push(("process_type", w.process_type.as_str()));
        }
        if !w.extension_type.is_known() {
            unknown.push(("extension_type", w.extension_type.as_str()));
        }
        if !w.audio_type.is_known() {
            unknown.push(("audio_type", w.audio_type.as_str()));
        }
        unknown
    }
}
