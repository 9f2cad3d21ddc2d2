//! Detection pipeline: validate, normalize, detect, summarize.

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, trace};

use energy_anomaly_api::{AnalysisConfig, DetectionConfig, DetectionMethod, SortOrder};
use energy_anomaly_spi::{
    AnnotatedSample, AnomalyBreakdown, AnomalyStats, DetectionError, RawRecord, Result, Sample,
};

use crate::detectors::detector_for;
use crate::normalizer::Normalizer;
use crate::stats::{anomaly_breakdown, anomaly_stats};

/// Result of a full analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyReport {
    pub method: DetectionMethod,
    pub samples: Vec<AnnotatedSample>,
    pub stats: AnomalyStats,
    pub breakdown: AnomalyBreakdown,
}

impl AnomalyReport {
    /// Flagged days only, in report order.
    pub fn anomalies(&self) -> impl Iterator<Item = &AnnotatedSample> {
        self.samples.iter().filter(|s| s.has_anomaly())
    }
}

/// Fail unless sample dates are strictly increasing and every total is a
/// non-negative finite number.
pub fn check_samples(samples: &[Sample]) -> Result<()> {
    let mut previous: Option<NaiveDate> = None;
    for (index, sample) in samples.iter().enumerate() {
        if !sample.total_energy.is_finite() || sample.total_energy < 0.0 {
            return Err(DetectionError::InvalidSample {
                index,
                date: sample.date,
                value: sample.total_energy,
            });
        }
        if let Some(previous) = previous.filter(|p| sample.date <= *p) {
            return Err(DetectionError::UnorderedSamples {
                index,
                previous,
                current: sample.date,
            });
        }
        previous = Some(sample.date);
    }
    Ok(())
}

/// Annotate a chronological sample sequence with the configured detector.
///
/// An empty sequence yields an empty result.
pub fn detect_anomalies(
    samples: &[Sample],
    config: &DetectionConfig,
) -> Result<Vec<AnnotatedSample>> {
    let detector = detector_for(config)?;
    check_samples(samples)?;

    let annotated = detector.detect(samples);
    for sample in annotated.iter().filter(|s| s.has_anomaly()) {
        trace!(
            date = %sample.date(),
            anomaly_type = ?sample.anomaly_type().map(|l| l.to_string()),
            "day flagged"
        );
    }
    Ok(annotated)
}

/// Reverse an ascending annotated sequence for latest-first display.
pub fn latest_first(mut samples: Vec<AnnotatedSample>) -> Vec<AnnotatedSample> {
    samples.reverse();
    samples
}

/// Normalize raw records, run detection and summarize.
///
/// `reference_date` ends the window when no record carries a usable date.
pub fn analyze(
    records: &[RawRecord],
    config: &AnalysisConfig,
    reference_date: NaiveDate,
) -> Result<AnomalyReport> {
    config.validate()?;
    let normalizer = Normalizer::from_config(&config.normalize)?;
    let samples = normalizer.normalize(records, reference_date);

    let annotated = detect_anomalies(&samples, &config.detection)?;
    let stats = anomaly_stats(&annotated);
    let breakdown = anomaly_breakdown(&annotated);
    debug!(
        method = %config.detection.method,
        records = records.len(),
        days = stats.total,
        anomalies = stats.anomalies,
        "analysis complete"
    );

    let samples = match config.order {
        SortOrder::Ascending => annotated,
        SortOrder::Descending => latest_first(annotated),
    };
    Ok(AnomalyReport {
        method: config.detection.method,
        samples,
        stats,
        breakdown,
    })
}

/// [`analyze`] with the current UTC date as the fallback window end.
pub fn analyze_today(records: &[RawRecord], config: &AnalysisConfig) -> Result<AnomalyReport> {
    analyze(records, config, Utc::now().date_naive())
}
