//! mlpath - terminal front end for the Mathematical ML onboarding tour.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve where onboarding state lives and load it.
//! - Run tour commands and print the result as a table or JSON.
//!
//! Does NOT handle:
//! - Navigation rules or persistence format (see `crates/onboarding`).
//! - Environment and `.env` precedence (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing.
//! - Logs go to stderr so stdout stays parseable with `--output json`.
//! - Storage failures never change the exit code.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use mlpath_config::{ConfigLoader, OnboardingConfig};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(e.exit_code().as_i32());
        }
    };

    if let Err(e) = run_command(cli, &config) {
        eprintln!("Error: {:#}", e);
        std::process::exit(e.exit_code().as_i32());
    }
}

/// CLI flags win over environment variables, which win over defaults.
fn resolve_config(cli: &Cli) -> Result<OnboardingConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(ref dir) = cli.state_dir {
        loader = loader.with_state_dir(dir.clone());
    }
    if let Some(ref key) = cli.key {
        loader = loader.with_storage_key(key.clone());
    }

    loader
        .from_env()
        .build()
        .context("Failed to build configuration")
}
