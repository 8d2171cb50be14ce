//! Property tests for placeholder substitution and numeric coercion.

mod common;

use std::collections::BTreeMap;

use common::{default_settings, install_prefix, resolver};
use dandere2x::domain::models::{PLACEHOLDER, SECTION, SUBSTITUTED_KEYS};
use dandere2x::{ConfigErrorKind, RawSettings};
use proptest::prelude::*;

fn raw(overrides: &[(&str, String)]) -> RawSettings {
    let mut values: BTreeMap<String, String> = default_settings()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    for (key, value) in overrides {
        values.insert((*key).to_string(), value.clone());
    }
    RawSettings::new(SECTION, values).unwrap()
}

/// Path fragments interleaved with `[this]` markers.
fn templated_path() -> impl Strategy<Value = (String, usize)> {
    prop::collection::vec(("[a-z0-9_/.-]{0,8}", any::<bool>()), 0..6).prop_map(|parts| {
        let mut text = String::new();
        let mut markers = 0;
        for (fragment, marker) in parts {
            text.push_str(&fragment);
            if marker {
                text.push_str(PLACEHOLDER);
                markers += 1;
            }
        }
        (text, markers)
    })
}

fn substituted_value(config: &dandere2x::ResolvedConfig, key: &str) -> String {
    let p = config.paths();
    match key {
        "waifu2x_caffe_cui_dir" => p.waifu2x_caffe_cui_dir.clone(),
        "model_dir" => p.model_dir.clone(),
        "workspace" => p.workspace.clone(),
        "dandere2x_cpp_dir" => p.dandere2x_cpp_dir.clone(),
        "ffmpeg_dir" => p.ffmpeg_dir.clone(),
        "file_dir" => p.file_dir.clone(),
        other => panic!("{other} is not substituted"),
    }
}

proptest! {
    /// Property: every marker in an eligible key is replaced by the same
    /// installation directory and nothing else changes.
    #[test]
    fn prop_eligible_keys_fully_substituted(
        key_index in 0..SUBSTITUTED_KEYS.len(),
        (template, markers) in templated_path(),
    ) {
        let key = SUBSTITUTED_KEYS[key_index];
        let config = resolver()
            .resolve_settings(&raw(&[(key, template.clone())]))
            .unwrap();
        let value = substituted_value(&config, key);

        prop_assert!(!value.contains(PLACEHOLDER));
        prop_assert!(value.matches(install_prefix().as_str()).count() >= markers);
        prop_assert_eq!(value, template.replace(PLACEHOLDER, &install_prefix()));
    }

    /// Property: keys outside the eligible set come back verbatim.
    #[test]
    fn prop_other_keys_verbatim((template, _markers) in templated_path()) {
        let config = resolver()
            .resolve_settings(&raw(&[
                ("dandere_dir", template.clone()),
                ("waifu2x_conv_dir", template.clone()),
                ("tolerance", template.clone()),
                ("scale_factor", template.clone()),
            ]))
            .unwrap();

        prop_assert_eq!(&config.paths().dandere_dir, &template);
        prop_assert_eq!(&config.paths().waifu2x_conv_dir, &template);
        prop_assert_eq!(&config.user().tolerance, &template);
        prop_assert_eq!(&config.upscale().scale_factor, &template);
    }

    /// Property: integer settings round-trip any i64 and bleed stays 1.
    #[test]
    fn prop_integer_settings(block in any::<i64>(), low in any::<i64>(), high in any::<i64>(), bleed in any::<i32>()) {
        let config = resolver()
            .resolve_settings(&raw(&[
                ("block_size", block.to_string()),
                ("quality_low", low.to_string()),
                ("quality_high", high.to_string()),
                ("bleed", bleed.to_string()),
            ]))
            .unwrap();

        prop_assert_eq!(config.user().block_size, block);
        prop_assert_eq!(config.user().quality_low, low);
        prop_assert_eq!(config.user().quality_high, high);
        prop_assert_eq!(config.user().bleed, 1);
    }

    /// Property: text with a letter in it never coerces to an integer.
    #[test]
    fn prop_non_integer_text_rejected(
        key_index in 0..3usize,
        text in "[0-9]{0,3}[a-zA-Z][0-9a-zA-Z]{0,4}",
    ) {
        let key = ["block_size", "quality_low", "quality_high"][key_index];
        let err = resolver()
            .resolve_settings(&raw(&[(key, text)]))
            .unwrap_err();

        prop_assert_eq!(err.kind(), ConfigErrorKind::Type);
        prop_assert_eq!(err.key(), Some(key));
    }

    /// Property: frame count is hours/minutes/seconds times the frame rate.
    #[test]
    fn prop_frame_count(h in 0u64..100, m in 0u64..60, s in 0u64..60, fps in 0u64..240) {
        let config = resolver()
            .resolve_settings(&raw(&[
                ("duration", format!("{h:02}:{m:02}:{s:02}")),
                ("frame_rate", fps.to_string()),
            ]))
            .unwrap();

        prop_assert_eq!(config.frame_count(), (h * 3600 + m * 60 + s) * fps);
    }
}
