//! Detector configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use energy_anomaly_spi::{DetectionError, Result};

/// Default drop below the trailing average that triggers a flag, in percent.
pub const DEFAULT_WINDOW_THRESHOLD_PERCENT: f64 = 40.0;
/// Default number of preceding days in the trailing average.
pub const DEFAULT_WINDOW_SIZE: usize = 7;
/// Default minimum acceptable daily production in kWh.
pub const DEFAULT_ABSOLUTE_THRESHOLD: f64 = 1.0;

// ============================================================================
// Detection Method
// ============================================================================

/// Detector strategy selected by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DetectionMethod {
    /// Drop against the trailing-window average
    #[default]
    WindowAverage,
    /// Fixed minimum kWh
    Absolute,
    /// Union of window average and absolute
    Combined,
}

impl DetectionMethod {
    /// Configuration name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMethod::WindowAverage => "windowAverage",
            DetectionMethod::Absolute => "absolute",
            DetectionMethod::Combined => "combined",
        }
    }

    /// Whether the trailing-window rule takes part.
    pub fn uses_window(&self) -> bool {
        matches!(self, DetectionMethod::WindowAverage | DetectionMethod::Combined)
    }

    /// Whether the absolute-threshold rule takes part.
    pub fn uses_absolute(&self) -> bool {
        matches!(self, DetectionMethod::Absolute | DetectionMethod::Combined)
    }
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetectionMethod {
    type Err = DetectionError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "windowaverage" => Ok(DetectionMethod::WindowAverage),
            "absolute" => Ok(DetectionMethod::Absolute),
            "combined" => Ok(DetectionMethod::Combined),
            _ => Err(DetectionError::UnknownMethod(s.to_string())),
        }
    }
}

impl TryFrom<String> for DetectionMethod {
    type Error = DetectionError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<DetectionMethod> for String {
    fn from(method: DetectionMethod) -> Self {
        method.as_str().to_string()
    }
}

// ============================================================================
// Detection Configuration
// ============================================================================

/// Detection configuration.
///
/// Every option has a default, so a JSON document only needs to name what it
/// changes. Options the selected method does not use are still validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetectionConfig {
    /// Detector strategy (default: windowAverage).
    pub method: DetectionMethod,
    /// Drop below the trailing average that triggers a flag, in percent (default: 40).
    #[serde(alias = "thresholdPercent")]
    pub window_threshold_percent: f64,
    /// Number of preceding days in the trailing average (default: 7).
    pub window_size: usize,
    /// Minimum acceptable daily production in kWh (default: 1.0).
    pub absolute_threshold: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            method: DetectionMethod::default(),
            window_threshold_percent: DEFAULT_WINDOW_THRESHOLD_PERCENT,
            window_size: DEFAULT_WINDOW_SIZE,
            absolute_threshold: DEFAULT_ABSOLUTE_THRESHOLD,
        }
    }
}

impl DetectionConfig {
    /// Default configuration for the given method.
    pub fn new(method: DetectionMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn window_average() -> Self {
        Self::new(DetectionMethod::WindowAverage)
    }

    pub fn absolute() -> Self {
        Self::new(DetectionMethod::Absolute)
    }

    pub fn combined() -> Self {
        Self::new(DetectionMethod::Combined)
    }

    /// Set the trailing-average drop threshold in percent.
    pub fn with_window_threshold_percent(mut self, percent: f64) -> Self {
        self.window_threshold_percent = percent;
        self
    }

    /// Set the trailing window length in days.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the minimum acceptable daily production in kWh.
    pub fn with_absolute_threshold(mut self, threshold: f64) -> Self {
        self.absolute_threshold = threshold;
        self
    }

    /// Check every option, failing on the first invalid one.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(DetectionError::invalid_parameter(
                "windowSize",
                "must be at least 1",
            ));
        }
        if !self.window_threshold_percent.is_finite()
            || !(0.0..=100.0).contains(&self.window_threshold_percent)
        {
            return Err(DetectionError::invalid_parameter(
                "windowThresholdPercent",
                format!(
                    "must be in range [0, 100], got {}",
                    self.window_threshold_percent
                ),
            ));
        }
        if !self.absolute_threshold.is_finite() || self.absolute_threshold < 0.0 {
            return Err(DetectionError::invalid_parameter(
                "absoluteThreshold",
                format!(
                    "must be a non-negative number, got {}",
                    self.absolute_threshold
                ),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
