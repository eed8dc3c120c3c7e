//! CLI exit codes and command errors.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Define errors for rejected navigation requests.
//!
//! Does NOT handle:
//! - Persistence failures, which never change the exit code.
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use mlpath_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for mlpath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Resource not found - unknown step id.
    NotFound = 4,

    /// Validation error - bad step number, invalid key, unknown output format.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Navigation requests the flow rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Step {requested} is out of range: the tour has {count} steps")]
    StepOutOfRange { requested: usize, count: usize },

    #[error("No onboarding step with id '{0}'")]
    UnknownStepId(String),
}

/// Invalid command-line input detected after parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("Invalid output format '{0}'. Valid values are 'table' or 'json'")]
    InvalidOutputFormat(String),
}

impl From<&NavigationError> for ExitCode {
    fn from(err: &NavigationError) -> Self {
        match err {
            NavigationError::StepOutOfRange { .. } => ExitCode::ValidationError,
            NavigationError::UnknownStepId(_) => ExitCode::NotFound,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::InvalidStorageKey(_) => ExitCode::ValidationError,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<NavigationError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(err);
            }
            if cause.downcast_ref::<UsageError>().is_some() {
                return ExitCode::ValidationError;
            }
        }
        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::NotFound.as_i32(), 4);
        assert_eq!(ExitCode::ValidationError.as_i32(), 5);
    }

    #[test]
    fn test_navigation_errors_map_to_exit_codes() {
        let out_of_range = anyhow::Error::new(NavigationError::StepOutOfRange {
            requested: 9,
            count: 6,
        });
        assert_eq!(out_of_range.exit_code(), ExitCode::ValidationError);

        let unknown = anyhow::Error::new(NavigationError::UnknownStepId("nope".to_string()));
        assert_eq!(unknown.exit_code(), ExitCode::NotFound);
    }

    #[test]
    fn test_context_wrapped_error_still_maps() {
        let err = anyhow::Error::new(ConfigError::InvalidStorageKey("a/b".to_string()))
            .context("Failed to resolve configuration");
        assert_eq!(err.exit_code(), ExitCode::ValidationError);
    }

    #[test]
    fn test_unknown_error_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
