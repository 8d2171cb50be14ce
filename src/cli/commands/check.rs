//! Implementation of the `dandere2x check` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::display::{action_success, action_warning, output, CommandOutput};
use crate::services::ConfigResolver;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Configuration source to validate
    pub config: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub success: bool,
    pub source: PathBuf,
    pub frame_count: u64,
    pub warnings: Vec<String>,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![action_success(&format!(
            "{} resolves ({} frames)",
            self.source.display(),
            self.frame_count
        ))];
        lines.extend(self.warnings.iter().map(|w| action_warning(w)));
        lines.join("\n")
    }
}

/// Resolve the source and report. Resolution failures propagate to the
/// caller, which reports the offending key and exits non-zero.
pub fn execute(args: CheckArgs, resolver: &ConfigResolver, json_mode: bool) -> Result<()> {
    let config = resolver.resolve(&args.config)?;

    let warnings = config
        .unknown_kinds()
        .into_iter()
        .map(|(key, value)| format!("{key} = {value:?} is not a recognised value"))
        .collect();

    let output_data = CheckOutput {
        success: true,
        source: args.config,
        frame_count: config.frame_count(),
        warnings,
    };
    output(&output_data, json_mode);
    Ok(())
}
