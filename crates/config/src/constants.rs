//! Centralized constants for the mlpath workspace.

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides the directory holding onboarding state files.
pub const ENV_STATE_DIR: &str = "MLPATH_STATE_DIR";

/// Overrides the storage key onboarding state is saved under.
pub const ENV_STATE_KEY: &str = "MLPATH_STATE_KEY";

/// When "1" or "true", `.env` files are not loaded.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Locations
// =============================================================================

/// Application name used for platform data directories.
pub const APP_NAME: &str = "mlpath";
