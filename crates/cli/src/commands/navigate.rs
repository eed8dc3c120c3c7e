//! Navigation commands: `next`, `prev`, `advance`, `goto`, `goto-id`.
//!
//! Boundary moves (`next` on the last step, `prev` on the first) are not
//! errors: state is unchanged and a notice goes to stderr. Jumps to steps
//! that do not exist fail without saving.

use anyhow::Result;
use mlpath_onboarding::Advance;

use super::{Session, print_status};
use crate::error::NavigationError;
use crate::formatters::OutputFormat;

pub fn run_next(session: &mut Session, format: OutputFormat) -> Result<()> {
    if session.flow_mut().next_step() {
        session.commit();
    } else {
        eprintln!("Already at the last step. Use `mlpath advance` or `mlpath complete` to finish.");
    }
    print_status(session.flow(), format)
}

pub fn run_prev(session: &mut Session, format: OutputFormat) -> Result<()> {
    if session.flow_mut().previous_step() {
        session.commit();
    } else {
        eprintln!("Already at the first step.");
    }
    print_status(session.flow(), format)
}

pub fn run_advance(session: &mut Session, format: OutputFormat) -> Result<()> {
    match session.flow_mut().advance() {
        Advance::Moved => session.commit(),
        Advance::Completed => {
            session.commit();
            eprintln!("Onboarding complete.");
        }
        Advance::Stalled => eprintln!("The onboarding tour has no steps."),
    }
    print_status(session.flow(), format)
}

/// `number` is 1-based.
pub fn run_goto(session: &mut Session, number: usize, format: OutputFormat) -> Result<()> {
    let count = session.flow().step_count();
    let moved = number
        .checked_sub(1)
        .is_some_and(|index| session.flow_mut().go_to_step(index));
    if !moved {
        return Err(NavigationError::StepOutOfRange {
            requested: number,
            count,
        }
        .into());
    }
    session.commit();
    print_status(session.flow(), format)
}

pub fn run_goto_id(session: &mut Session, id: &str, format: OutputFormat) -> Result<()> {
    if !session.flow_mut().go_to_step_by_id(id) {
        return Err(NavigationError::UnknownStepId(id.to_string()).into());
    }
    session.commit();
    print_status(session.flow(), format)
}
