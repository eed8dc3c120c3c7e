//! Persisted form of an onboarding flow.
//!
//! Responsibilities:
//! - Define `FlowSnapshot`, the versioned `{steps, currentStepIndex, isCompleted}` record.
//! - Encode snapshots to JSON and decode stored JSON with lenient field defaults.
//!
//! Does NOT handle:
//! - Talking to a store (see `persistence` and `store`).
//! - Validating the catalog or clamping the index (see `FlowManager::from_snapshot`).
//!
//! Invariants:
//! - Snapshots are always written with `version = SNAPSHOT_VERSION`.
//! - A stored value without `version` is the unversioned legacy layout (version 0).
//! - Missing or null fields decode to: default catalog, index 0, not completed.

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::step::{OnboardingStep, default_steps};

/// Current snapshot layout version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Layout version assumed for values written before versioning existed.
pub const LEGACY_SNAPSHOT_VERSION: u32 = 0;

/// Serializable copy of a flow's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowSnapshot {
    pub version: u32,
    pub steps: Vec<OnboardingStep>,
    pub current_step_index: usize,
    pub is_completed: bool,
}

/// Wire shape accepted on read; every field may be absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSnapshot {
    #[serde(default)]
    version: Option<u32>,
    #[serde(default)]
    steps: Option<Vec<OnboardingStep>>,
    #[serde(default)]
    current_step_index: Option<usize>,
    #[serde(default)]
    is_completed: Option<bool>,
}

impl FlowSnapshot {
    /// Encodes the snapshot as compact JSON.
    pub fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string(self).map_err(StorageError::Serialize)
    }

    /// Decodes a stored value read from `key`.
    ///
    /// # Errors
    /// - `StorageError::Parse` if `raw` is not a JSON object of the expected shape.
    /// - `StorageError::UnsupportedVersion` if it was written by a newer layout.
    pub fn from_json(key: &str, raw: &str) -> Result<Self, StorageError> {
        let stored: StoredSnapshot =
            serde_json::from_str(raw).map_err(|source| StorageError::Parse {
                key: key.to_string(),
                source,
            })?;

        let version = stored.version.unwrap_or(LEGACY_SNAPSHOT_VERSION);
        if version > SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: version,
                supported: SNAPSHOT_VERSION,
            });
        }

        Ok(Self {
            version: SNAPSHOT_VERSION,
            steps: stored.steps.unwrap_or_else(default_steps),
            current_step_index: stored.current_step_index.unwrap_or(0),
            is_completed: stored.is_completed.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uses_camel_case_and_version() {
        let snapshot = FlowSnapshot {
            version: SNAPSHOT_VERSION,
            steps: vec![OnboardingStep::new("a", "A", "first")],
            current_step_index: 0,
            is_completed: true,
        };
        let value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();

        assert_eq!(value["version"], 1);
        assert_eq!(value["currentStepIndex"], 0);
        assert_eq!(value["isCompleted"], true);
        assert_eq!(value["steps"][0]["id"], "a");
    }

    #[test]
    fn test_empty_object_falls_back_to_defaults() {
        let snapshot = FlowSnapshot::from_json("k", "{}").unwrap();
        assert_eq!(snapshot.steps, default_steps());
        assert_eq!(snapshot.current_step_index, 0);
        assert!(!snapshot.is_completed);
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let raw = r#"{"steps":null,"currentStepIndex":null,"isCompleted":null}"#;
        let snapshot = FlowSnapshot::from_json("k", raw).unwrap();
        assert_eq!(snapshot.steps.len(), 6);
        assert_eq!(snapshot.current_step_index, 0);
        assert!(!snapshot.is_completed);
    }

    #[test]
    fn test_legacy_unversioned_layout_is_read() {
        let raw = r#"{"steps":[{"id":"a","title":"A","description":"d"}],"currentStepIndex":0,"isCompleted":true}"#;
        let snapshot = FlowSnapshot::from_json("k", raw).unwrap();
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.steps.len(), 1);
        assert!(snapshot.is_completed);
    }

    #[test]
    fn test_empty_steps_array_is_kept() {
        let snapshot = FlowSnapshot::from_json("k", r#"{"steps":[]}"#).unwrap();
        assert!(snapshot.steps.is_empty());
    }

    #[test]
    fn test_newer_version_rejected() {
        let err = FlowSnapshot::from_json("k", r#"{"version":99}"#).unwrap_err();
        assert!(matches!(
            err,
            StorageError::UnsupportedVersion {
                found: 99,
                supported: SNAPSHOT_VERSION
            }
        ));
    }

    #[test]
    fn test_non_json_rejected_with_key() {
        let err = FlowSnapshot::from_json("onboarding_state", "not json {").unwrap_err();
        match err {
            StorageError::Parse { key, .. } => assert_eq!(key, "onboarding_state"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_index_rejected() {
        let err = FlowSnapshot::from_json("k", r#"{"currentStepIndex":-1}"#).unwrap_err();
        assert!(matches!(err, StorageError::Parse { .. }));
    }
}
