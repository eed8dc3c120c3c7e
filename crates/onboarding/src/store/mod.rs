//! String-keyed value stores used to persist onboarding state.
//!
//! Responsibilities:
//! - Define the `KeyValueStore` seam the persistence adapter writes through.
//! - Provide an in-memory backend and a file-backed backend.
//! - Provide the shared key validation rule.
//!
//! Does NOT handle:
//! - Snapshot encoding (see `snapshot`).
//! - Logging or swallowing failures (see `persistence`).
//!
//! Invariants:
//! - `get` on an absent key is `Ok(None)`, never an error.
//! - `remove` on an absent key succeeds.
//! - Writes are last-writer-wins; stores do no locking.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;

/// A string-keyed store of string values.
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;

    /// Deletes the value under `key`.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Returns true if `key` is usable by every backend.
///
/// Keys are non-empty, made of ASCII letters, digits, `-`, `_` and `.`,
/// and do not start with `.`.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    if is_valid_key(key) {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
