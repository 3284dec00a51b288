//! Schedule files: named cron expressions kept in TOML.
//!
//! ```toml
//! [[schedules]]
//! name = "business-hours"
//! second = { expression = "specific_values", arguments = [0] }
//! minute = { expression = "specific_values", arguments = [0] }
//! hour = { expression = "between_hours", arguments = [9, 17] }
//! week_day = { expression = "between_week_days", arguments = [1, 5] }
//! ```
//!
//! Fields left out default to their "every" form.

use std::path::Path;

use cronkit_core::{CronError, Result};
use serde::{Deserialize, Serialize};

use crate::field::CronExpression;

/// A named cron expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSpec {
    pub name: String,
    #[serde(flatten)]
    pub expression: CronExpression,
}

/// Outcome of rendering one schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSchedule {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RenderedSchedule {
    pub fn is_ok(&self) -> bool {
        self.cron.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleFile {
    #[serde(default)]
    pub schedules: Vec<ScheduleSpec>,
}

impl ScheduleFile {
    /// Parse a schedule file from string content.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CronError::Config(format!("Failed to parse schedules: {e}")))
    }

    /// Load a schedule file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CronError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let file = Self::from_toml(&content)?;
        tracing::debug!("Loaded {} schedules from {}", file.schedules.len(), path.display());
        Ok(file)
    }

    pub fn get(&self, name: &str) -> Option<&ScheduleSpec> {
        self.schedules.iter().find(|s| s.name == name)
    }

    /// Render every schedule in file order. A failing schedule does not stop
    /// the others.
    pub fn render_all(&self) -> Vec<RenderedSchedule> {
        self.schedules
            .iter()
            .map(|spec| match spec.expression.render() {
                Ok(cron) => RenderedSchedule {
                    name: spec.name.clone(),
                    cron: Some(cron),
                    error: None,
                },
                Err(e) => {
                    tracing::warn!("Schedule '{}' failed to render: {e}", spec.name);
                    RenderedSchedule {
                        name: spec.name.clone(),
                        cron: None,
                        error: Some(e.to_string()),
                    }
                }
            })
            .collect()
    }
}
