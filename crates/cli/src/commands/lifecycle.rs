//! Completion lifecycle commands: `complete`, `reset`, `clear`.

use anyhow::Result;

use super::{Session, print_status};
use crate::formatters::OutputFormat;

pub fn run_complete(session: &mut Session, format: OutputFormat) -> Result<()> {
    session.flow_mut().mark_completed();
    session.commit();
    print_status(session.flow(), format)
}

pub fn run_reset(session: &mut Session, format: OutputFormat) -> Result<()> {
    session.flow_mut().reset();
    session.commit();
    print_status(session.flow(), format)
}

pub fn run_clear(session: Session) -> Result<()> {
    session.clear();
    eprintln!("Onboarding state cleared.");
    Ok(())
}
