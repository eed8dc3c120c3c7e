//! Saving, loading, and clearing onboarding flows against a key-value store.
//!
//! Responsibilities:
//! - `save`, `load`, `clear`: `Result`-returning operations over any `KeyValueStore`.
//! - `FlowPersistence`: best-effort wrapper that owns a store and a key,
//!   logs failures, and never surfaces them to the caller.
//!
//! Does NOT handle:
//! - Choosing a state directory or key from configuration (see `mlpath-config`).
//! - Snapshot field defaults (see `snapshot`).
//!
//! Invariants:
//! - An absent or blank stored value loads as `Ok(None)`.
//! - `FlowPersistence` never panics and never returns an error; a failed load
//!   is indistinguishable from "no prior state" for its callers.

use crate::error::StorageError;
use crate::flow::FlowManager;
use crate::snapshot::FlowSnapshot;
use crate::store::KeyValueStore;

/// Key used when the caller does not choose one.
pub const DEFAULT_STORAGE_KEY: &str = "onboarding_state";

/// Writes the flow's snapshot under `key`, replacing any previous value.
pub fn save<S>(store: &mut S, key: &str, flow: &FlowManager) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
{
    let json = flow.snapshot().to_json()?;
    store.set(key, json)
}

/// Restores a flow saved under `key`.
///
/// # Errors
/// - `StorageError::Parse` if the stored value is malformed.
/// - `StorageError::UnsupportedVersion` if it was written by a newer layout.
/// - `StorageError::InvalidCatalog` if the stored steps repeat an id.
/// - Any error the store itself reports.
pub fn load<S>(store: &S, key: &str) -> Result<Option<FlowManager>, StorageError>
where
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }

    let snapshot = FlowSnapshot::from_json(key, &raw)?;
    let flow = FlowManager::from_snapshot(snapshot)?;
    Ok(Some(flow))
}

/// Removes whatever is stored under `key`.
pub fn clear<S>(store: &mut S, key: &str) -> Result<(), StorageError>
where
    S: KeyValueStore + ?Sized,
{
    store.remove(key)
}

/// Best-effort persistence of a single flow under a fixed key.
#[derive(Debug, Clone)]
pub struct FlowPersistence<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> FlowPersistence<S> {
    /// Persists under `DEFAULT_STORAGE_KEY`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Saves the flow; failures are logged and otherwise ignored.
    pub fn save(&mut self, flow: &FlowManager) {
        match save(&mut self.store, &self.key, flow) {
            Ok(()) => {
                tracing::debug!(
                    key = %self.key,
                    step_index = flow.current_step_index(),
                    completed = flow.is_completed(),
                    "Onboarding state saved"
                );
            }
            Err(e) => {
                tracing::warn!(
                    key = %self.key,
                    error = %e,
                    "Failed to save onboarding state"
                );
            }
        }
    }

    /// Loads a previously saved flow.
    ///
    /// Returns `None` if nothing is stored or the stored value cannot be used;
    /// the caller should start a fresh flow.
    pub fn load(&self) -> Option<FlowManager> {
        match load(&self.store, &self.key) {
            Ok(flow) => flow,
            Err(e) => {
                tracing::warn!(
                    key = %self.key,
                    error = %e,
                    "Failed to load onboarding state, starting fresh"
                );
                None
            }
        }
    }

    /// Loads a saved flow, or a fresh one over the default catalog.
    pub fn load_or_default(&self) -> FlowManager {
        self.load().unwrap_or_default()
    }

    /// Removes the saved flow; failures are logged and otherwise ignored.
    pub fn clear(&mut self) {
        if let Err(e) = clear(&mut self.store, &self.key) {
            tracing::warn!(
                key = %self.key,
                error = %e,
                "Failed to clear onboarding state"
            );
        }
    }
}
