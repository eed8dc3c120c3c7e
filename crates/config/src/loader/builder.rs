//! Configuration loader builder implementation.
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Unset values fall back to the platform state dir and the default key.
//! - The storage key is validated in `build()`, before any file is touched.

use std::path::{Path, PathBuf};

use mlpath_onboarding::{DEFAULT_STORAGE_KEY, is_valid_key};

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::ENV_DOTENV_DISABLED;
use crate::path::default_state_dir;
use crate::types::OnboardingConfig;

/// Builds an `OnboardingConfig` from `.env`, environment, and overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    state_dir: Option<PathBuf>,
    storage_key: Option<String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Skipped entirely when `DOTENV_DISABLED` is "1" or "true".
    /// Missing `.env` files are silently ignored.
    ///
    /// # Errors
    /// - `ConfigError::DotenvParse` if the file has invalid syntax.
    /// - `ConfigError::DotenvIo` if it exists but cannot be read.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Override the state directory. Blank paths are ignored.
    pub fn with_state_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if !dir.as_os_str().to_string_lossy().trim().is_empty() {
            self.state_dir = Some(dir);
        }
        self
    }

    /// Override the storage key. Blank keys are ignored.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        let trimmed = key.trim();
        if !trimmed.is_empty() {
            self.storage_key = Some(trimmed.to_string());
        }
        self
    }

    pub(crate) fn state_dir(&self) -> Option<&Path> {
        self.state_dir.as_deref()
    }

    pub(crate) fn storage_key(&self) -> Option<&str> {
        self.storage_key.as_deref()
    }

    pub(crate) fn set_state_dir(&mut self, dir: Option<PathBuf>) {
        self.state_dir = dir;
    }

    pub(crate) fn set_storage_key(&mut self, key: Option<String>) {
        self.storage_key = key;
    }

    /// Resolve the final configuration.
    ///
    /// # Errors
    /// - `ConfigError::InvalidStorageKey` if the key could not name a state file.
    /// - `ConfigError::StateDirUnavailable` if no directory was given and the
    ///   platform data directory cannot be determined.
    pub fn build(self) -> Result<OnboardingConfig, ConfigError> {
        let storage_key = self
            .storage_key
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
        if !is_valid_key(&storage_key) {
            return Err(ConfigError::InvalidStorageKey(storage_key));
        }

        let state_dir = match self.state_dir {
            Some(dir) => dir,
            None => default_state_dir()
                .map_err(|e| ConfigError::StateDirUnavailable(format!("{e:#}")))?,
        };

        Ok(OnboardingConfig {
            state_dir,
            storage_key,
        })
    }
}
