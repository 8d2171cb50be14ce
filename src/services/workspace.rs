//! Creation of the workspace directory tree.
//!
//! Resolution never touches the filesystem; the first stage that needs the
//! workspace calls [`prepare_workspace`] before writing into it.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::domain::models::ResolvedConfig;

/// Workspace root followed by every derived sub-directory, in layout order.
pub fn planned_directories(config: &ResolvedConfig) -> Vec<PathBuf> {
    std::iter::once(config.workspace_root())
        .chain(config.workspace().entries().into_iter().map(|(_, path)| path))
        .map(PathBuf::from)
        .collect()
}

/// Create the workspace root and its sub-directories.
///
/// Returns the directories that did not exist before the call. Running it
/// again on a prepared workspace creates nothing.
pub fn prepare_workspace(config: &ResolvedConfig) -> Result<Vec<PathBuf>> {
    let mut created = Vec::new();
    for dir in planned_directories(config) {
        if dir.is_dir() {
            continue;
        }
        fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;
        debug!(dir = %dir.display(), "created workspace directory");
        created.push(dir);
    }
    info!(
        workspace = config.workspace_root(),
        created = created.len(),
        "workspace prepared"
    );
    Ok(created)
}
