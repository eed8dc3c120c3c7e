//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not resolve configuration (see `mlpath_config::ConfigLoader`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mlpath")]
#[command(about = "Walk through the Mathematical ML onboarding tour from the terminal", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  mlpath status\n  mlpath next\n  mlpath goto 3\n  mlpath goto-id challenges\n  mlpath skip\n  mlpath --output json status\n  mlpath --state-dir /tmp/tour reset\n\nEnvironment:\n  MLPATH_STATE_DIR  Directory holding onboarding state\n  MLPATH_STATE_KEY  Key the tour is saved under (default: onboarding_state)\n  RUST_LOG          Log filter, e.g. RUST_LOG=debug"
)]
pub struct Cli {
    /// Directory holding onboarding state (default: platform data directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,

    /// Key the tour is saved under
    #[arg(long, global = true, value_name = "KEY")]
    pub key: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the current step and progress
    Status,

    /// List every step in the tour
    Steps,

    /// Move to the next step
    Next,

    /// Move to the previous step
    #[command(alias = "previous")]
    Prev,

    /// Move to the next step, finishing the tour on the last one
    Advance,

    /// Jump to a step by number (1 is the first step)
    Goto {
        /// Step number, starting at 1
        number: usize,
    },

    /// Jump to a step by id
    GotoId {
        /// Step id, e.g. "challenges"
        id: String,
    },

    /// Mark the tour completed without moving
    #[command(alias = "skip")]
    Complete,

    /// Return to the first step and clear completion
    Reset,

    /// Delete saved onboarding state
    Clear,
}
