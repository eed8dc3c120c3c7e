//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.

use std::path::PathBuf;

use super::builder::ConfigLoader;
use crate::constants::{ENV_STATE_DIR, ENV_STATE_KEY};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// Values already set through builder methods are left alone.
pub fn apply_env(loader: &mut ConfigLoader) {
    if loader.state_dir().is_none()
        && let Some(dir) = env_var_or_none(ENV_STATE_DIR)
    {
        loader.set_state_dir(Some(PathBuf::from(dir)));
    }
    if loader.storage_key().is_none()
        && let Some(key) = env_var_or_none(ENV_STATE_KEY)
    {
        loader.set_storage_key(Some(key));
    }
}
