//! Union of the window-average and absolute detectors.

use energy_anomaly_api::DetectionConfig;
use energy_anomaly_spi::{AnomalyLabel, AnomalyType, Detector, Finding, Result, Sample};

use super::{AbsoluteDetector, WindowAverageDetector};

/// Joins the window and absolute reasons when both rules fire on a day.
pub const REASON_SEPARATOR: &str = " ";

/// Flags a day when either the window-average or the absolute rule fires.
///
/// When both fire, `ZERO_GENERATION` wins outright; otherwise both types are
/// kept, window rule first. Both reasons are always kept.
#[derive(Debug, Clone)]
pub struct CombinedDetector {
    window: WindowAverageDetector,
    absolute: AbsoluteDetector,
}

impl CombinedDetector {
    pub fn new(window: WindowAverageDetector, absolute: AbsoluteDetector) -> Self {
        Self { window, absolute }
    }

    /// Create from configuration.
    pub fn from_config(config: &DetectionConfig) -> Result<Self> {
        Ok(Self::new(
            WindowAverageDetector::from_config(config)?,
            AbsoluteDetector::from_config(config)?,
        ))
    }

    pub fn window(&self) -> &WindowAverageDetector {
        &self.window
    }

    pub fn absolute(&self) -> &AbsoluteDetector {
        &self.absolute
    }
}

impl Detector for CombinedDetector {
    fn name(&self) -> &'static str {
        "combined"
    }

    fn evaluate(&self, samples: &[Sample], index: usize) -> Option<Finding> {
        merge_findings(
            self.window.evaluate(samples, index),
            self.absolute.evaluate(samples, index),
        )
    }
}

/// Merge the window-rule and absolute-rule findings for one day.
pub fn merge_findings(window: Option<Finding>, absolute: Option<Finding>) -> Option<Finding> {
    match (window, absolute) {
        (None, None) => None,
        (Some(finding), None) | (None, Some(finding)) => Some(finding),
        (Some(window), Some(absolute)) => {
            let zero = window.label.contains(AnomalyType::ZeroGeneration)
                || absolute.label.contains(AnomalyType::ZeroGeneration);
            let label = if zero {
                AnomalyLabel::single(AnomalyType::ZeroGeneration)
            } else {
                absolute
                    .label
                    .types()
                    .iter()
                    .fold(window.label, |label, t| label.with(*t))
            };
            let reason = format!("{}{}{}", window.reason, REASON_SEPARATOR, absolute.reason);
            Some(Finding::with_label(label, reason))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(values: &[f64]) -> Vec<Sample> {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Sample::new(start + chrono::Duration::days(i as i64), v))
            .collect()
    }

    fn detector(window_size: usize, percent: f64, threshold: f64) -> CombinedDetector {
        CombinedDetector::from_config(
            &DetectionConfig::combined()
                .with_window_size(window_size)
                .with_window_threshold_percent(percent)
                .with_absolute_threshold(threshold),
        )
        .unwrap()
    }

    #[test]
    fn test_both_rules_fire() {
        let samples = series(&[8.0, 8.0, 8.0, 8.0, 8.0, 2.0, 0.0]);
        let annotated = detector(5, 40.0, 3.0).detect(&samples);

        assert!(annotated[..5].iter().all(|s| !s.has_anomaly()));

        let day6 = &annotated[5];
        assert_eq!(
            day6.anomaly_type().map(|l| l.to_string()),
            Some("SUDDEN_DROP,BELOW_THRESHOLD".to_string())
        );
        assert_eq!(
            day6.anomaly_reason(),
            Some(
                "Production of 2.0 kWh is 75.0% below the 5-day average of 8.0 kWh. \
                 Production of 2.0 kWh is below the minimum threshold of 3.0 kWh."
            )
        );

        let day7 = &annotated[6];
        assert_eq!(
            day7.anomaly_type().map(|l| l.types().to_vec()),
            Some(vec![AnomalyType::ZeroGeneration])
        );
        let reason = day7.anomaly_reason().unwrap();
        assert!(reason.contains("5-day average of 6.8 kWh"));
        assert!(reason.ends_with("No energy generated on this day (0.0 kWh)."));
    }

    #[test]
    fn test_only_absolute_fires_during_warmup() {
        let samples = series(&[2.0, 8.0, 8.0]);
        let annotated = detector(2, 40.0, 3.0).detect(&samples);
        assert_eq!(
            annotated[0].anomaly_type().map(|l| l.to_string()),
            Some("BELOW_THRESHOLD".to_string())
        );
        assert_eq!(
            annotated[0].anomaly_reason(),
            Some("Production of 2.0 kWh is below the minimum threshold of 3.0 kWh.")
        );
    }

    #[test]
    fn test_only_window_fires() {
        let samples = series(&[20.0, 20.0, 5.0]);
        let annotated = detector(2, 40.0, 3.0).detect(&samples);
        assert_eq!(
            annotated[2].anomaly_type().map(|l| l.to_string()),
            Some("SUDDEN_DROP".to_string())
        );
    }

    #[test]
    fn test_merge_none() {
        assert_eq!(merge_findings(None, None), None);
    }

    #[test]
    fn test_merge_zero_wins() {
        let window = Finding::new(AnomalyType::SuddenDrop, "Window.");
        let absolute = Finding::new(AnomalyType::ZeroGeneration, "Zero.");
        let merged = merge_findings(Some(window), Some(absolute)).unwrap();
        assert_eq!(merged.label.types(), &[AnomalyType::ZeroGeneration]);
        assert_eq!(merged.reason, "Window. Zero.");
    }

    #[test]
    fn test_accessors() {
        let combined = detector(4, 30.0, 2.0);
        assert_eq!(combined.window().window_size(), 4);
        assert_eq!(combined.window().threshold_percent(), 30.0);
        assert_eq!(combined.absolute().threshold(), 2.0);
    }
}
