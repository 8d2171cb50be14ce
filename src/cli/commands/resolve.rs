//! Implementation of the `dandere2x resolve` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::display::{output, CommandOutput, DetailView};
use crate::domain::models::ResolvedConfig;
use crate::services::ConfigResolver;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Configuration source (INI, or TOML/YAML by .toml/.yaml/.yml extension)
    pub config: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ResolveOutput {
    pub source: PathBuf,
    pub config: ResolvedConfig,
}

impl CommandOutput for ResolveOutput {
    fn to_human(&self) -> String {
        let c = &self.config;
        let p = c.paths();
        let u = c.user();
        let w = c.upscale();

        let mut view = DetailView::new(&format!("dandere2x session ({})", self.source.display()))
            .field("install_dir", c.install_dir())
            .section("Paths")
            .field("waifu2x_caffe_cui_dir", &p.waifu2x_caffe_cui_dir)
            .field("model_dir", &p.model_dir)
            .field("workspace", &p.workspace)
            .field("dandere2x_cpp_dir", &p.dandere2x_cpp_dir)
            .field("ffmpeg_dir", &p.ffmpeg_dir)
            .field("file_dir", &p.file_dir)
            .field("waifu2x_conv_dir", &p.waifu2x_conv_dir)
            .field("waifu2x_conv_dir_dir", &p.waifu2x_conv_dir_dir)
            .field("dandere_dir", &p.dandere_dir)
            .section("User settings")
            .field("time_frame", &u.time_frame)
            .field("duration", &u.duration)
            .field("audio_layer", &u.audio_layer)
            .field("frame_rate", &u.frame_rate)
            .field("width", &u.width)
            .field("height", &u.height)
            .field("block_size", &u.block_size.to_string())
            .field("tolerance", &u.tolerance)
            .field("step_size", &u.step_size)
            .field("bleed", &u.bleed.to_string())
            .field("quality_low", &u.quality_low.to_string())
            .field("quality_high", &u.quality_high.to_string())
            .section("Upscaling")
            .field("waifu2x_type", w.waifu2x_type.as_str())
            .field("noise_level", &w.noise_level)
            .field("scale_factor", &w.scale_factor)
            .field("process_type", w.process_type.as_str())
            .field("extension_type", w.extension_type.as_str())
            .field("audio_type", w.audio_type.as_str())
            .section("Workspace");

        for (name, path) in c.workspace().entries() {
            view = view.field(name, path);
        }

        view.section("Derived")
            .field("frame_count", &c.frame_count().to_string())
            .render()
    }
}

pub fn execute(args: ResolveArgs, resolver: &ConfigResolver, json_mode: bool) -> Result<()> {
    let config = resolver.resolve(&args.config)?;
    let output_data = ResolveOutput {
        source: args.config,
        config,
    };
    output(&output_data, json_mode);
    Ok(())
}
