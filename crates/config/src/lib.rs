//! Configuration management for the mlpath onboarding tools.
//!
//! This crate resolves where onboarding state is stored and under which key,
//! from `.env` files, environment variables, and explicit overrides.

pub mod constants;
mod loader;
mod path;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use path::default_state_dir;
pub use types::OnboardingConfig;
