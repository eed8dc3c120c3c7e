//! Output formatters for CLI commands.
//!
//! Provides two output formats: a human-readable table and JSON.

use std::str::FromStr;

use anyhow::Result;
use mlpath_onboarding::{FlowManager, OnboardingStep};
use serde::Serialize;

use crate::error::UsageError;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UsageError::InvalidOutputFormat(s.to_string())),
        }
    }
}

/// Status of the tour as reported by `status` and navigation commands.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusOutput<'a> {
    pub current_step_index: usize,
    pub total_steps: usize,
    pub progress_percentage: f64,
    pub is_completed: bool,
    pub is_first_step: bool,
    pub is_last_step: bool,
    pub step: Option<&'a OnboardingStep>,
}

impl<'a> From<&'a FlowManager> for StatusOutput<'a> {
    fn from(flow: &'a FlowManager) -> Self {
        Self {
            current_step_index: flow.current_step_index(),
            total_steps: flow.step_count(),
            progress_percentage: flow.progress_percentage(),
            is_completed: flow.is_completed(),
            is_first_step: flow.is_first_step(),
            is_last_step: flow.is_last_step(),
            step: flow.current_step(),
        }
    }
}

/// One catalog entry in `steps` output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepListEntry<'a> {
    pub index: usize,
    pub current: bool,
    #[serde(flatten)]
    pub step: &'a OnboardingStep,
}

fn step_entries(flow: &FlowManager) -> Vec<StepListEntry<'_>> {
    flow.steps()
        .iter()
        .enumerate()
        .map(|(index, step)| StepListEntry {
            index,
            current: index == flow.current_step_index(),
            step,
        })
        .collect()
}

/// Formatter trait for different output types.
pub trait Formatter {
    fn format_status(&self, flow: &FlowManager) -> Result<String>;

    fn format_steps(&self, flow: &FlowManager) -> Result<String>;
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_status(&self, flow: &FlowManager) -> Result<String> {
        Ok(serde_json::to_string_pretty(&StatusOutput::from(flow))?)
    }

    fn format_steps(&self, flow: &FlowManager) -> Result<String> {
        Ok(serde_json::to_string_pretty(&step_entries(flow))?)
    }
}

pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_status(&self, flow: &FlowManager) -> Result<String> {
        let Some(step) = flow.current_step() else {
            return Ok("The onboarding tour has no steps.".to_string());
        };

        let mut output = format!(
            "Step {} of {} ({:.2}%)",
            flow.current_step_index() + 1,
            flow.step_count(),
            flow.progress_percentage()
        );
        if flow.is_completed() {
            output.push_str("  [completed]");
        }
        output.push('\n');

        match &step.icon {
            Some(icon) => output.push_str(&format!("{} {}\n", icon, step.title)),
            None => output.push_str(&format!("{}\n", step.title)),
        }
        output.push_str(&format!("{}\n", step.description));
        if let Some(selector) = &step.target_selector {
            output.push_str(&format!("Highlights: {}\n", selector));
        }
        if let Some(position) = step.position {
            output.push_str(&format!("Position: {}\n", position.as_str()));
        }
        Ok(output)
    }

    fn format_steps(&self, flow: &FlowManager) -> Result<String> {
        let entries = step_entries(flow);
        let id_width = entries
            .iter()
            .map(|e| e.step.id.chars().count())
            .max()
            .unwrap_or(0)
            .max("ID".len());

        let mut output = format!("   {:>3}  {:<id_width$}  TITLE\n", "#", "ID");
        for entry in &entries {
            let marker = if entry.current { ">" } else { " " };
            output.push_str(&format!(
                " {} {:>3}  {:<id_width$}  {}\n",
                marker,
                entry.index + 1,
                entry.step.id,
                entry.step.title
            ));
        }
        Ok(output)
    }
}

pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlpath_onboarding::{StepCatalog, StepPosition};

    fn two_steps() -> FlowManager {
        FlowManager::new(
            StepCatalog::new(vec![
                OnboardingStep::new("intro", "Intro", "Hello").with_icon("👋"),
                OnboardingStep::new("sidebar", "Sidebar", "Navigate here")
                    .with_target("#sidebar")
                    .with_position(StepPosition::Right),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("TABLE".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert_eq!(
            "xml".parse::<OutputFormat>(),
            Err(UsageError::InvalidOutputFormat("xml".to_string()))
        );
    }

    #[test]
    fn test_table_status_first_step() {
        let output = TableFormatter.format_status(&two_steps()).unwrap();
        assert!(output.starts_with("Step 1 of 2 (50.00%)\n"));
        assert!(output.contains("👋 Intro\n"));
        assert!(!output.contains("[completed]"));
    }

    #[test]
    fn test_table_status_shows_target_and_completion() {
        let mut flow = two_steps();
        flow.next_step();
        flow.mark_completed();
        let output = TableFormatter.format_status(&flow).unwrap();
        assert!(output.contains("Step 2 of 2 (100.00%)  [completed]"));
        assert!(output.contains("Highlights: #sidebar"));
        assert!(output.contains("Position: right"));
    }

    #[test]
    fn test_table_status_empty_catalog() {
        let flow = FlowManager::new(StepCatalog::empty());
        let output = TableFormatter.format_status(&flow).unwrap();
        assert_eq!(output, "The onboarding tour has no steps.");
    }

    #[test]
    fn test_table_steps_marks_current() {
        let mut flow = two_steps();
        flow.next_step();
        let output = TableFormatter.format_steps(&flow).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("     1  intro"));
        assert!(lines[2].starts_with(" >   2  sidebar"));
    }

    #[test]
    fn test_json_status_fields() {
        let output = JsonFormatter.format_status(&two_steps()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["currentStepIndex"], 0);
        assert_eq!(value["totalSteps"], 2);
        assert_eq!(value["progressPercentage"], 50.0);
        assert_eq!(value["isFirstStep"], true);
        assert_eq!(value["step"]["id"], "intro");
    }

    #[test]
    fn test_json_steps_flatten_step_fields() {
        let output = JsonFormatter.format_steps(&two_steps()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["index"], 0);
        assert_eq!(value[0]["current"], true);
        assert_eq!(value[1]["id"], "sidebar");
        assert_eq!(value[1]["targetSelector"], "#sidebar");
    }
}
