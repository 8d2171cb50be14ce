//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration test
//! files.

#![allow(dead_code)]

use std::fs;
use std::path::{PathBuf, MAIN_SEPARATOR};

use dandere2x::{ConfigResolver, InstallDir};
use tempfile::TempDir;

/// Installation directory used by resolvers built with [`resolver`].
pub const INSTALL_DIR: &str = "/opt/dandere2x";

/// `INSTALL_DIR` as it appears after substitution.
pub fn install_prefix() -> String {
    format!("{INSTALL_DIR}{MAIN_SEPARATOR}")
}

/// A resolver with a fixed installation directory and no env overrides.
pub fn resolver() -> ConfigResolver {
    let install_dir = InstallDir::new(INSTALL_DIR).expect("install dir is absolute");
    ConfigResolver::with_install_dir(install_dir)
}

/// Settings of a typical Windows release config, in key order.
pub fn default_settings() -> Vec<(&'static str, String)> {
    [
        ("waifu2x_caffe_cui_dir", "[this]waifu2x-caffe\\waifu2x-caffe-cui.exe"),
        ("model_dir", "[this]waifu2x-caffe\\models\\"),
        ("workspace", "[this]workspace\\"),
        ("dandere2x_cpp_dir", "[this]dandere2x_cpp.exe"),
        ("ffmpeg_dir", "[this]ffmpeg\\ffmpeg.exe"),
        ("file_dir", "[this]demo_files\\yn_moving_480.mkv"),
        ("waifu2x_type", "caffe"),
        ("waifu2x_conv_dir", "[this]waifu2x-conv\\waifu2x-converter-cpp.exe"),
        ("waifu2x_conv_dir_dir", "[this]waifu2x-conv\\"),
        ("dandere_dir", "/home/linux/Documents/waifu2x/dandere.lua"),
        ("time_frame", "00:00:00"),
        ("duration", "00:02:00"),
        ("audio_layer", "audio.mp3"),
        ("frame_rate", "24"),
        ("width", "1920"),
        ("height", "1080"),
        ("block_size", "30"),
        ("tolerance", "15"),
        ("step_size", "4"),
        ("bleed", "5"),
        ("quality_low", "85"),
        ("quality_high", "95"),
        ("noise_level", "3"),
        ("scale_factor", "2"),
        ("process_type", "cudnn"),
        ("extension_type", ".jpg"),
        ("audio_type", ".mp3"),
    ]
    .into_iter()
    .map(|(k, v)| (k, v.to_string()))
    .collect()
}

/// Default settings with `overrides` applied and `omit` removed.
pub fn settings_with(overrides: &[(&str, &str)], omit: &[&str]) -> Vec<(&'static str, String)> {
    default_settings()
        .into_iter()
        .filter(|(k, _)| !omit.contains(k))
        .map(|(k, v)| {
            let value = overrides
                .iter()
                .find(|(key, _)| *key == k)
                .map_or(v, |(_, value)| (*value).to_string());
            (k, value)
        })
        .collect()
}

/// Render settings as a TOML `[dandere2x]` section.
pub fn to_toml(settings: &[(&str, String)]) -> String {
    let mut body = String::from("[dandere2x]\n");
    for (key, value) in settings {
        body.push_str(key);
        body.push_str(" = ");
        body.push_str(&toml_string(value));
        body.push('\n');
    }
    body
}

/// Render settings as an INI `[dandere2x]` section with unquoted values.
pub fn to_ini(settings: &[(&str, String)]) -> String {
    let mut body = String::from("[dandere2x]\n");
    for (key, value) in settings {
        body.push_str(key);
        body.push_str(" = ");
        body.push_str(value);
        body.push('\n');
    }
    body
}

/// Render settings as a YAML `dandere2x:` mapping.
pub fn to_yaml(settings: &[(&str, String)]) -> String {
    let mut body = String::from("dandere2x:\n");
    for (key, value) in settings {
        body.push_str("  ");
        body.push_str(key);
        body.push_str(": '");
        body.push_str(&value.replace('\'', "''"));
        body.push_str("'\n");
    }
    body
}

fn toml_string(value: &str) -> String {
    // Literal strings keep backslashes as-is.
    if value.contains('\'') {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        format!("'{value}'")
    }
}

/// Write `contents` to `name` inside a fresh temporary directory.
pub fn write_source(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write config source");
    (dir, path)
}
