//! Onboarding flow sequencer for the Mathematical ML learning path.
//!
//! This crate provides the step catalog, the flow manager that walks a user
//! through it, and best-effort persistence of that flow to a string-keyed
//! store (in memory or one JSON file per key).

pub mod error;
pub mod flow;
pub mod persistence;
pub mod placement;
pub mod snapshot;
pub mod step;
pub mod store;

pub use error::{CatalogError, StorageError};
pub use flow::{Advance, FlowManager};
pub use persistence::{DEFAULT_STORAGE_KEY, FlowPersistence};
pub use placement::{Rect, TooltipPlacement, Viewport, highlight_outline, tooltip_placement};
pub use snapshot::{FlowSnapshot, SNAPSHOT_VERSION};
pub use step::{OnboardingStep, StepCatalog, StepPosition, default_steps};
pub use store::{FileStore, KeyValueStore, MemoryStore, is_valid_key};
