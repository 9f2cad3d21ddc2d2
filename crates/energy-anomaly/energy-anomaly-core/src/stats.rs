//! Summary statistics over annotated sequences.

use energy_anomaly_spi::{AnnotatedSample, AnomalyBreakdown, AnomalyStats};

/// Count total, flagged and normal days.
pub fn anomaly_stats(samples: &[AnnotatedSample]) -> AnomalyStats {
    let anomalies = samples.iter().filter(|s| s.has_anomaly()).count();
    AnomalyStats::new(samples.len(), anomalies)
}

/// Count flagged days per anomaly type and per severity.
pub fn anomaly_breakdown(samples: &[AnnotatedSample]) -> AnomalyBreakdown {
    samples
        .iter()
        .fold(AnomalyBreakdown::default(), |mut breakdown, sample| {
            breakdown.record(sample);
            breakdown
        })
}
