//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges defaults, `.env`,
//!   environment variables, and explicit overrides.
//! - Enforce the `DOTENV_DISABLED` gate to keep tests hermetic.
//!
//! Does NOT handle:
//! - Reading or writing onboarding state (see `mlpath_onboarding`).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
