//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Open the onboarding session each command runs against.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use mlpath_config::OnboardingConfig;

use crate::args::{Cli, Commands};
use crate::commands::{Session, lifecycle, navigate, status};
use crate::formatters::OutputFormat;

/// Dispatch CLI commands to their respective handlers.
///
/// The output format is validated before any state is read.
pub(crate) fn run_command(cli: Cli, config: &OnboardingConfig) -> Result<()> {
    let format: OutputFormat = cli.output.parse()?;
    let mut session = Session::open(config);

    match cli.command {
        Commands::Status => status::run_status(&session, format),
        Commands::Steps => status::run_steps(&session, format),
        Commands::Next => navigate::run_next(&mut session, format),
        Commands::Prev => navigate::run_prev(&mut session, format),
        Commands::Advance => navigate::run_advance(&mut session, format),
        Commands::Goto { number } => navigate::run_goto(&mut session, number, format),
        Commands::GotoId { id } => navigate::run_goto_id(&mut session, &id, format),
        Commands::Complete => lifecycle::run_complete(&mut session, format),
        Commands::Reset => lifecycle::run_reset(&mut session, format),
        Commands::Clear => lifecycle::run_clear(session),
    }
}
