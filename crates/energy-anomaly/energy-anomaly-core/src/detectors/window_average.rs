//! Trailing-window average detector.

use energy_anomaly_api::DetectionConfig;
use energy_anomaly_spi::{AnomalyType, DetectionError, Detector, Finding, Result, Sample};

/// Flags days whose production falls a configured percentage below the
/// average of the preceding `window_size` days.
///
/// Only earlier samples feed the baseline, so a flag never depends on later
/// days. The first `window_size` days are never flagged.
#[derive(Debug, Clone)]
pub struct WindowAverageDetector {
    window_size: usize,
    threshold_percent: f64,
}

impl WindowAverageDetector {
    /// Create a new detector.
    ///
    /// # Arguments
    ///
    /// * `window_size` - Number of preceding days in the baseline average
    /// * `threshold_percent` - Drop below the baseline that triggers a flag, 0 to 100
    pub fn new(window_size: usize, threshold_percent: f64) -> Result<Self> {
        if window_size == 0 {
            return Err(DetectionError::invalid_parameter(
                "windowSize",
                "must be at least 1",
            ));
        }
        if !threshold_percent.is_finite() || !(0.0..=100.0).contains(&threshold_percent) {
            return Err(DetectionError::invalid_parameter(
                "windowThresholdPercent",
                format!("must be in range [0, 100], got {}", threshold_percent),
            ));
        }
        Ok(Self {
            window_size,
            threshold_percent,
        })
    }

    /// Create from configuration.
    pub fn from_config(config: &DetectionConfig) -> Result<Self> {
        Self::new(config.window_size, config.window_threshold_percent)
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn threshold_percent(&self) -> f64 {
        self.threshold_percent
    }

    /// Average production of the `window_size` days before `index`, or `None`
    /// while the window has not filled.
    pub fn baseline(&self, samples: &[Sample], index: usize) -> Option<f64> {
        if index < self.window_size || index > samples.len() {
            return None;
        }
        let window = &samples[index - self.window_size..index];
        let sum: f64 = window.iter().map(|s| s.total_energy).sum();
        Some(sum / self.window_size as f64)
    }
}

impl Detector for WindowAverageDetector {
    fn name(&self) -> &'static str {
        "windowAverage"
    }

    fn evaluate(&self, samples: &[Sample], index: usize) -> Option<Finding> {
        let value = samples.get(index)?.total_energy;
        let baseline = self.baseline(samples, index)?;
        // No meaningful baseline to compare against.
        if baseline <= 0.0 {
            return None;
        }

        let drop_percent = (baseline - value) / baseline * 100.0;
        if drop_percent < self.threshold_percent {
            return None;
        }

        let comparison = format!(
            "Production of {:.1} kWh is {:.1}% below the {}-day average of {:.1} kWh",
            value, drop_percent, self.window_size, baseline
        );
        Some(if value == 0.0 {
            Finding::new(
                AnomalyType::ZeroGeneration,
                format!("{}; no energy was generated.", comparison),
            )
        } else {
            Finding::new(AnomalyType::SuddenDrop, format!("{}.", comparison))
        })
    }
}
