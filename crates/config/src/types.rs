//! Resolved configuration types.

use std::path::PathBuf;

use mlpath_onboarding::{FileStore, FlowPersistence};

/// Where and under which key onboarding state is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingConfig {
    /// Directory holding one state file per key.
    pub state_dir: PathBuf,
    /// Key the flow is saved under.
    pub storage_key: String,
}

impl OnboardingConfig {
    /// Best-effort persistence backed by a `FileStore` in `state_dir`.
    pub fn persistence(&self) -> FlowPersistence<FileStore> {
        FlowPersistence::new(FileStore::new(&self.state_dir)).with_key(self.storage_key.clone())
    }

    /// Path of the file holding the flow.
    pub fn state_file(&self) -> PathBuf {
        self.state_dir.join(format!("{}.json", self.storage_key))
    }
}
