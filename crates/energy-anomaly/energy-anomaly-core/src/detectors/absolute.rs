//! Fixed-minimum detector.

use energy_anomaly_api::DetectionConfig;
use energy_anomaly_spi::{AnomalyType, DetectionError, Detector, Finding, Result, Sample};

/// Flags days below a fixed minimum production, independent of history.
///
/// A day with exactly zero production is always `ZERO_GENERATION`, whatever
/// the threshold.
#[derive(Debug, Clone)]
pub struct AbsoluteDetector {
    threshold: f64,
}

impl AbsoluteDetector {
    /// Create a new detector with the minimum acceptable daily kWh.
    pub fn new(threshold: f64) -> Result<Self> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(DetectionError::invalid_parameter(
                "absoluteThreshold",
                format!("must be a non-negative number, got {}", threshold),
            ));
        }
        Ok(Self { threshold })
    }

    /// Create from configuration.
    pub fn from_config(config: &DetectionConfig) -> Result<Self> {
        Self::new(config.absolute_threshold)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Detector for AbsoluteDetector {
    fn name(&self) -> &'static str {
        "absolute"
    }

    fn evaluate(&self, samples: &[Sample], index: usize) -> Option<Finding> {
        let value = samples.get(index)?.total_energy;
        if value == 0.0 {
            Some(Finding::new(
                AnomalyType::ZeroGeneration,
                "No energy generated on this day (0.0 kWh).",
            ))
        } else if value < self.threshold {
            Some(Finding::new(
                AnomalyType::BelowThreshold,
                format!(
                    "Production of {:.1} kWh is below the minimum threshold of {:.1} kWh.",
                    value, self.threshold
                ),
            ))
        } else {
            None
        }
    }
}
