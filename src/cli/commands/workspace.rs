//! Implementation of the `dandere2x workspace` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::display::{action_success, list_table, output, CommandOutput};
use crate::services::{planned_directories, prepare_workspace, ConfigResolver};

#[derive(Args, Debug)]
pub struct WorkspaceArgs {
    /// Configuration source describing the workspace
    pub config: PathBuf,

    /// List the directories without creating them
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Serialize)]
pub struct WorkspaceOutput {
    pub success: bool,
    pub workspace: String,
    pub dry_run: bool,
    pub directories: Vec<PathBuf>,
    pub created: Vec<PathBuf>,
}

impl CommandOutput for WorkspaceOutput {
    fn to_human(&self) -> String {
        let message = if self.dry_run {
            format!("Workspace {} (dry run)", self.workspace)
        } else {
            format!(
                "Workspace {} ready, {} director{} created",
                self.workspace,
                self.created.len(),
                if self.created.len() == 1 { "y" } else { "ies" }
            )
        };

        let mut table = list_table(&["directory", "status"]);
        for dir in &self.directories {
            let status = if self.created.contains(dir) {
                "created"
            } else if self.dry_run {
                "planned"
            } else {
                "exists"
            };
            table.add_row(vec![dir.display().to_string(), status.to_string()]);
        }

        format!("{}\n{}", action_success(&message), table)
    }
}

pub fn execute(args: WorkspaceArgs, resolver: &ConfigResolver, json_mode: bool) -> Result<()> {
    let config = resolver.resolve(&args.config)?;
    let directories = planned_directories(&config);

    let created = if args.dry_run {
        vec![]
    } else {
        prepare_workspace(&config).context("Failed to prepare workspace")?
    };

    let output_data = WorkspaceOutput {
        success: true,
        workspace: config.workspace_root().to_string(),
        dry_run: args.dry_run,
        directories,
        created,
    };
    output(&output_data, json_mode);
    Ok(())
}
