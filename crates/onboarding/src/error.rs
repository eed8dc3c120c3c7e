//! Error types for the onboarding sequencer.
//!
//! Responsibilities:
//! - Define catalog validation failures (`CatalogError`).
//! - Define persistence failures (`StorageError`) for every store backend.
//!
//! Does NOT handle:
//! - Deciding whether a failure is logged or surfaced (see `persistence`).
//!
//! Invariants:
//! - Navigation never produces an error; only catalog construction and
//!   persistence do.
//! - Every storage variant carries the key it was operating on when one exists.

use thiserror::Error;

/// Errors raised while building a step catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Duplicate onboarding step id '{0}'")]
    DuplicateStepId(String),
}

/// Errors raised by key-value stores and the snapshot codec.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error for key '{key}': {source}")]
    Io {
        key: String,
        source: std::io::Error,
    },

    #[error("Failed to serialize onboarding state: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to parse stored onboarding state under key '{key}': {source}")]
    Parse {
        key: String,
        source: serde_json::Error,
    },

    #[error("Invalid storage key '{0}': use ASCII letters, digits, '-', '_' or '.'")]
    InvalidKey(String),

    #[error("Storage quota exceeded for key '{key}': {needed} bytes needed, limit is {limit}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    #[error("Unsupported onboarding state version {found} (this build reads up to {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Stored onboarding catalog is invalid: {0}")]
    InvalidCatalog(#[from] CatalogError),
}
