//! Path helpers for onboarding state locations.
//!
//! Responsibilities:
//! - Determine the platform-standard state directory via `directories`.
//!
//! Does NOT handle:
//! - File I/O (see `mlpath_onboarding::FileStore`).

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::APP_NAME;

/// Returns the default directory for onboarding state.
///
/// - Linux: `~/.local/share/mlpath`
/// - macOS: `~/Library/Application Support/mlpath`
/// - Windows: `%AppData%\mlpath\data`
pub fn default_state_dir() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.data_dir().to_path_buf())
}
