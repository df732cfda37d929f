//! Run Output
//!
//! Bundles the final report with any checkpoints and renders the result as
//! text or JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

use keepaway_events::{InspectionReport, RoundSnapshot};

/// How the result of a run is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Everything a finished run produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checkpoints: Vec<RoundSnapshot>,
    pub report: InspectionReport,
}

impl RunOutput {
    pub fn new(report: InspectionReport, checkpoints: Vec<RoundSnapshot>) -> Self {
        Self {
            checkpoints,
            report,
        }
    }

    /// Render in the requested format
    pub fn render(&self, format: ReportFormat) -> Result<String, serde_json::Error> {
        match format {
            ReportFormat::Text => Ok(self.to_string()),
            ReportFormat::Json => serde_json::to_string_pretty(self),
        }
    }
}

impl fmt::Display for RunOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for checkpoint in &self.checkpoints {
            writeln!(f, "== After round {} ==", checkpoint.round)?;
            for actor in &checkpoint.actors {
                writeln!(
                    f,
                    "Monkey {} inspected items {} times.",
                    actor.actor_id, actor.inspections
                )?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", self.report)
    }
}
