use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Upper limit for the rollup window (ten years of months).
pub const MAX_ROLLUP_MONTHS: u32 = 120;

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Tunables for the aggregation engine.
///
/// Every field has a default, so a partial JSON document is enough to
/// override a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// How many transactions the summary lists as recent activity.
    pub recent_limit: usize,

    /// Number of calendar months in the trailing rollup, current month included.
    pub rollup_months: u32,

    /// Label used when a transaction's category cannot be resolved.
    pub uncategorized_label: String,

    /// Month display names, January first.
    pub month_names: Vec<String>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            recent_limit: 5,
            rollup_months: 6,
            uncategorized_label: "Uncategorized".to_string(),
            month_names: ENGLISH_MONTHS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl EngineSettings {
    /// Parse settings from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: EngineSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.rollup_months == 0 || self.rollup_months > MAX_ROLLUP_MONTHS {
            return Err(CoreError::InvalidSettings(format!(
                "rollup_months must be between 1 and {MAX_ROLLUP_MONTHS}, got {}",
                self.rollup_months
            )));
        }
        if self.uncategorized_label.trim().is_empty() {
            return Err(CoreError::InvalidSettings(
                "uncategorized_label must not be blank".into(),
            ));
        }
        if self.month_names.len() != 12 {
            return Err(CoreError::InvalidSettings(format!(
                "month_names must list 12 months, got {}",
                self.month_names.len()
            )));
        }
        if let Some(pos) = self.month_names.iter().position(|m| m.trim().is_empty()) {
            return Err(CoreError::InvalidSettings(format!(
                "month_names[{pos}] must not be blank"
            )));
        }
        Ok(())
    }

    /// Display name for a 1-based month. Falls back to the month number if
    /// the settings were never validated.
    pub fn month_label(&self, month: u32) -> String {
        month
            .checked_sub(1)
            .and_then(|idx| self.month_names.get(idx as usize))
            .cloned()
            .unwrap_or_else(|| month.to_string())
    }
}
