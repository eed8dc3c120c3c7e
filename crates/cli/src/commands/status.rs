//! Read-only commands: `status` and `steps`.

use anyhow::Result;

use super::{Session, print_status};
use crate::formatters::{OutputFormat, get_formatter};

pub fn run_status(session: &Session, format: OutputFormat) -> Result<()> {
    print_status(session.flow(), format)
}

pub fn run_steps(session: &Session, format: OutputFormat) -> Result<()> {
    let formatter = get_formatter(format);
    println!("{}", formatter.format_steps(session.flow())?.trim_end());
    Ok(())
}
