//! Normalization window and output ordering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use energy_anomaly_spi::{DetectionError, Result};

/// Predefined analysis windows offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowPreset {
    #[serde(rename = "7days")]
    Last7Days,
    #[serde(rename = "30days")]
    Last30Days,
}

impl WindowPreset {
    pub fn days(&self) -> usize {
        match self {
            WindowPreset::Last7Days => 7,
            WindowPreset::Last30Days => 30,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WindowPreset::Last7Days => "7days",
            WindowPreset::Last30Days => "30days",
        }
    }

    /// Display label, e.g. "Last 7 Days".
    pub fn label(&self) -> &'static str {
        match self {
            WindowPreset::Last7Days => "Last 7 Days",
            WindowPreset::Last30Days => "Last 30 Days",
        }
    }
}

impl fmt::Display for WindowPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WindowPreset {
    type Err = DetectionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "7days" => Ok(WindowPreset::Last7Days),
            "30days" => Ok(WindowPreset::Last30Days),
            other => Err(DetectionError::invalid_parameter(
                "preset",
                format!("expected 7days or 30days, got '{}'", other),
            )),
        }
    }
}

/// Order of the annotated sequence handed back to the caller.
///
/// Detection always runs on ascending dates; this only affects presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    /// Oldest day first
    #[default]
    Ascending,
    /// Latest day first
    Descending,
}

/// Longest normalization window accepted, one leap year of days.
pub const MAX_WINDOW_DAYS: usize = 366;

/// Normalizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NormalizeConfig {
    /// Number of consecutive days to emit, ending at the latest record (default: 7).
    pub window_days: usize,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self::from_preset(WindowPreset::Last7Days)
    }
}

impl NormalizeConfig {
    pub fn new(window_days: usize) -> Self {
        Self { window_days }
    }

    pub fn from_preset(preset: WindowPreset) -> Self {
        Self::new(preset.days())
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_days == 0 {
            return Err(DetectionError::invalid_parameter(
                "windowDays",
                "must be at least 1",
            ));
        }
        if self.window_days > MAX_WINDOW_DAYS {
            return Err(DetectionError::invalid_parameter(
                "windowDays",
                format!(
                    "must be at most {}, got {}",
                    MAX_WINDOW_DAYS, self.window_days
                ),
            ));
        }
        Ok(())
    }
}
