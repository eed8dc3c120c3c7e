//! Command implementations.
//!
//! Every command runs against a `Session`: the flow is loaded best-effort
//! when the session opens and saved best-effort when it is committed.
//! Read-only commands never commit.

pub mod lifecycle;
pub mod navigate;
pub mod status;

use anyhow::Result;
use mlpath_config::OnboardingConfig;
use mlpath_onboarding::{FileStore, FlowManager, FlowPersistence};

use crate::formatters::{OutputFormat, get_formatter};

/// A loaded flow plus the store it came from.
pub struct Session {
    persistence: FlowPersistence<FileStore>,
    flow: FlowManager,
}

impl Session {
    /// Loads saved state, or starts a fresh tour if there is none usable.
    pub fn open(config: &OnboardingConfig) -> Self {
        let persistence = config.persistence();
        let flow = persistence.load_or_default();
        tracing::debug!(
            state_file = %config.state_file().display(),
            step_index = flow.current_step_index(),
            completed = flow.is_completed(),
            "Onboarding session opened"
        );
        Self { persistence, flow }
    }

    pub fn flow(&self) -> &FlowManager {
        &self.flow
    }

    pub fn flow_mut(&mut self) -> &mut FlowManager {
        &mut self.flow
    }

    /// Saves the flow. Storage failures are logged, not returned.
    pub fn commit(&mut self) {
        self.persistence.save(&self.flow);
    }

    /// Deletes saved state. Storage failures are logged, not returned.
    pub fn clear(mut self) {
        self.persistence.clear();
    }
}

/// Prints the flow's status in the requested format.
pub fn print_status(flow: &FlowManager, format: OutputFormat) -> Result<()> {
    let formatter = get_formatter(format);
    println!("{}", formatter.format_status(flow)?.trim_end());
    Ok(())
}
