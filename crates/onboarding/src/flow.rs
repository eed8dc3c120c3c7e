//! Onboarding flow state and navigation.
//!
//! Responsibilities:
//! - Own the current step index and the completion flag for one catalog.
//! - Provide total navigation operations that report success as `bool`.
//! - Convert to and from `FlowSnapshot` for persistence.
//!
//! Does NOT handle:
//! - Reading or writing stores (see `persistence`).
//! - Rendering steps (the presentation layer reads state through accessors).
//!
//! Invariants:
//! - `current_step_index < steps.len()` whenever the catalog is non-empty,
//!   and `current_step_index == 0` when it is empty.
//! - Rejected navigation never mutates state.
//! - Completion only changes through `mark_completed`, `skip`, `advance`
//!   at the last step, or `reset`; reaching the last step does not complete.

use crate::error::CatalogError;
use crate::snapshot::{FlowSnapshot, SNAPSHOT_VERSION};
use crate::step::{OnboardingStep, StepCatalog};

/// Outcome of `FlowManager::advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the following step.
    Moved,
    /// Was on the last step; the flow is now completed.
    Completed,
    /// The catalog is empty; nothing changed.
    Stalled,
}

/// Stateful sequencer over a step catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowManager {
    catalog: StepCatalog,
    current_step_index: usize,
    is_completed: bool,
}

impl Default for FlowManager {
    fn default() -> Self {
        Self::new(StepCatalog::default())
    }
}

impl FlowManager {
    /// Starts a flow at the first step, not completed.
    pub fn new(catalog: StepCatalog) -> Self {
        Self {
            catalog,
            current_step_index: 0,
            is_completed: false,
        }
    }

    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    pub fn steps(&self) -> &[OnboardingStep] {
        self.catalog.steps()
    }

    pub fn step_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// The active step, or `None` for an empty catalog.
    pub fn current_step(&self) -> Option<&OnboardingStep> {
        self.catalog.get(self.current_step_index)
    }

    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    /// Moves forward one step. Returns `false` at the last step.
    pub fn next_step(&mut self) -> bool {
        if self.current_step_index + 1 < self.catalog.len() {
            self.current_step_index += 1;
            true
        } else {
            false
        }
    }

    /// Moves back one step. Returns `false` at the first step.
    pub fn previous_step(&mut self) -> bool {
        if self.current_step_index > 0 {
            self.current_step_index -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps to `index` if it is inside the catalog.
    pub fn go_to_step(&mut self, index: usize) -> bool {
        if index < self.catalog.len() {
            self.current_step_index = index;
            true
        } else {
            false
        }
    }

    /// Jumps to the first step whose id matches.
    pub fn go_to_step_by_id(&mut self, id: &str) -> bool {
        match self.catalog.position_of(id) {
            Some(index) => self.go_to_step(index),
            None => false,
        }
    }

    /// The "Next / Finish" action: move forward, or complete on the last step.
    pub fn advance(&mut self) -> Advance {
        if self.catalog.is_empty() {
            return Advance::Stalled;
        }
        if self.next_step() {
            Advance::Moved
        } else {
            self.mark_completed();
            Advance::Completed
        }
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Marks the flow completed without moving.
    pub fn mark_completed(&mut self) {
        self.is_completed = true;
    }

    /// Skips the rest of the tutorial.
    pub fn skip(&mut self) {
        self.mark_completed();
    }

    /// Back to the first step, not completed.
    pub fn reset(&mut self) {
        self.current_step_index = 0;
        self.is_completed = false;
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step_index == 0
    }

    /// Always `false` for an empty catalog.
    pub fn is_last_step(&self) -> bool {
        !self.catalog.is_empty() && self.current_step_index == self.catalog.len() - 1
    }

    /// `(index + 1) / len * 100`, or `0.0` for an empty catalog.
    pub fn progress_percentage(&self) -> f64 {
        if self.catalog.is_empty() {
            return 0.0;
        }
        (self.current_step_index + 1) as f64 / self.catalog.len() as f64 * 100.0
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            version: SNAPSHOT_VERSION,
            steps: self.catalog.steps().to_vec(),
            current_step_index: self.current_step_index,
            is_completed: self.is_completed,
        }
    }

    /// Rebuilds a flow from a snapshot.
    ///
    /// An index past the end of the catalog is clamped to the last step.
    ///
    /// # Errors
    /// Returns `CatalogError::DuplicateStepId` if the stored steps repeat an id.
    pub fn from_snapshot(snapshot: FlowSnapshot) -> Result<Self, CatalogError> {
        let catalog = StepCatalog::new(snapshot.steps)?;
        let last_index = catalog.len().saturating_sub(1);
        let current_step_index = if snapshot.current_step_index > last_index {
            tracing::warn!(
                stored_index = snapshot.current_step_index,
                step_count = catalog.len(),
                "Stored onboarding step index is outside the catalog; clamping"
            );
            last_index
        } else {
            snapshot.current_step_index
        };

        Ok(Self {
            catalog,
            current_step_index,
            is_completed: snapshot.is_completed,
        })
    }
}
