//! Onboarding step definitions and the step catalog.
//!
//! Responsibilities:
//! - Define `OnboardingStep` and its placement hint (`StepPosition`).
//! - Provide `StepCatalog`, the ordered list of steps a flow walks through.
//! - Provide the built-in six-step catalog for the learning path tour.
//!
//! Does NOT handle:
//! - Navigation state (see `flow`).
//! - Resolving `target_selector` against a rendered UI.
//!
//! Invariants:
//! - Step ids are unique within a catalog built through `StepCatalog::new`.
//! - Catalog order is the step sequence; a catalog is never reordered.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Where the tooltip for a step sits relative to its highlighted element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepPosition {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl StepPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            StepPosition::Top => "top",
            StepPosition::Bottom => "bottom",
            StepPosition::Left => "left",
            StepPosition::Right => "right",
            StepPosition::Center => "center",
        }
    }
}

/// One screen of the guided first-run tutorial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStep {
    /// Stable identifier, unique within a catalog.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Advisory reference to the UI element to highlight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_selector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<StepPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl OnboardingStep {
    /// Creates a step with no target, position, or icon.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            target_selector: None,
            position: None,
            icon: None,
        }
    }

    pub fn with_target(mut self, selector: impl Into<String>) -> Self {
        self.target_selector = Some(selector.into());
        self
    }

    pub fn with_position(mut self, position: StepPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Ordered, immutable list of onboarding steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCatalog {
    steps: Vec<OnboardingStep>,
}

impl StepCatalog {
    /// Builds a catalog, rejecting duplicate step ids.
    ///
    /// # Errors
    /// Returns `CatalogError::DuplicateStepId` naming the first repeated id.
    pub fn new(steps: Vec<OnboardingStep>) -> Result<Self, CatalogError> {
        if let Some(duplicate) = first_duplicate_id(&steps) {
            return Err(CatalogError::DuplicateStepId(duplicate.to_string()));
        }
        Ok(Self { steps })
    }

    /// A catalog with no steps.
    pub fn empty() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn steps(&self) -> &[OnboardingStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&OnboardingStep> {
        self.steps.get(index)
    }

    /// Position of the first step with the given id.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|step| step.id == id)
    }
}

impl Default for StepCatalog {
    fn default() -> Self {
        Self {
            steps: default_steps(),
        }
    }
}

fn first_duplicate_id(steps: &[OnboardingStep]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(steps.len());
    steps
        .iter()
        .map(|step| step.id.as_str())
        .find(|id| !seen.insert(*id))
}

/// The built-in tour shown on first visit to the learning path.
pub fn default_steps() -> Vec<OnboardingStep> {
    vec![
        OnboardingStep::new(
            "welcome",
            "Welcome to Mathematical ML! 👋",
            "Learn machine learning algorithms through interactive visualizations and \
             step-by-step guidance. Let's take a quick tour!",
        )
        .with_icon("🎓")
        .with_position(StepPosition::Center),
        OnboardingStep::new(
            "learning-path",
            "Your Learning Path",
            "Algorithms are organized by difficulty level. Start with beginner algorithms \
             and unlock more advanced ones as you progress.",
        )
        .with_icon("🗺️")
        .with_position(StepPosition::Center),
        OnboardingStep::new(
            "workflow-steps",
            "6-Step Learning Workflow",
            "Each algorithm has 6 steps: Introduction, Mathematics, Intuition, \
             Implementation, Visualization, and Practice. Complete all steps to master \
             the algorithm.",
        )
        .with_icon("📚")
        .with_position(StepPosition::Center),
        OnboardingStep::new(
            "progress-tracking",
            "Track Your Progress",
            "Your progress is automatically saved. View your dashboard to see completed \
             algorithms, achievements, and recommendations.",
        )
        .with_icon("📊")
        .with_position(StepPosition::Center),
        OnboardingStep::new(
            "challenges",
            "Practice Challenges",
            "Complete practice challenges after each algorithm to test your understanding \
             and earn mastery status.",
        )
        .with_icon("🎯")
        .with_position(StepPosition::Center),
        OnboardingStep::new(
            "achievements",
            "Earn Achievements",
            "Unlock badges, earn points, and generate certificates as you complete \
             algorithms and maintain learning streaks.",
        )
        .with_icon("🏆")
        .with_position(StepPosition::Center),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_six_unique_steps() {
        let catalog = StepCatalog::default();
        assert_eq!(catalog.len(), 6);
        assert!(StepCatalog::new(catalog.steps().to_vec()).is_ok());
        assert_eq!(catalog.get(0).map(|s| s.id.as_str()), Some("welcome"));
        assert_eq!(catalog.get(5).map(|s| s.id.as_str()), Some("achievements"));
        assert!(
            catalog
                .steps()
                .iter()
                .all(|s| s.position == Some(StepPosition::Center) && s.icon.is_some())
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = StepCatalog::new(vec![
            OnboardingStep::new("a", "A", "first"),
            OnboardingStep::new("b", "B", "second"),
            OnboardingStep::new("a", "A again", "third"),
        ]);
        assert_eq!(result, Err(CatalogError::DuplicateStepId("a".to_string())));
    }

    #[test]
    fn test_position_of_returns_catalog_index() {
        let catalog = StepCatalog::default();
        assert_eq!(catalog.position_of("workflow-steps"), Some(2));
        assert_eq!(catalog.position_of("missing"), None);
    }

    #[test]
    fn test_step_serializes_camel_case_and_omits_absent_fields() {
        let step = OnboardingStep::new("nav", "Navigation", "Use the sidebar")
            .with_target("#sidebar")
            .with_position(StepPosition::Right);
        let json = serde_json::to_value(&step).unwrap();

        assert_eq!(json["targetSelector"], "#sidebar");
        assert_eq!(json["position"], "right");
        assert!(json.get("icon").is_none());
        assert!(json.get("target_selector").is_none());
    }

    #[test]
    fn test_step_without_optional_fields_deserializes() {
        let step: OnboardingStep =
            serde_json::from_str(r#"{"id":"x","title":"X","description":"d"}"#).unwrap();
        assert_eq!(step, OnboardingStep::new("x", "X", "d"));
    }
}
