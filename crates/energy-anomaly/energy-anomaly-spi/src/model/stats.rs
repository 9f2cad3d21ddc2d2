//! Summary counts over an annotated sequence.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{AnnotatedSample, AnomalyType, Severity};

/// Day counts over one annotated sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyStats {
    /// Number of days analysed
    pub total: usize,
    /// Days flagged by the detector
    pub anomalies: usize,
    /// Days not flagged
    pub normal: usize,
}

impl AnomalyStats {
    /// Create stats from the total and the flagged count.
    ///
    /// `anomalies` must not exceed `total`.
    pub fn new(total: usize, anomalies: usize) -> Self {
        debug_assert!(
            anomalies <= total,
            "{} anomalies out of {} days",
            anomalies,
            total
        );
        Self {
            total,
            anomalies,
            normal: total - anomalies,
        }
    }

    /// Share of flagged days in percent, `None` for an empty sequence.
    pub fn anomaly_percent(&self) -> Option<f64> {
        percent(self.anomalies, self.total)
    }

    /// Share of normal days in percent, `None` for an empty sequence.
    pub fn normal_percent(&self) -> Option<f64> {
        percent(self.normal, self.total)
    }
}

fn percent(part: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(part as f64 / total as f64 * 100.0)
    }
}

/// Flagged-day counts per anomaly type and per severity.
///
/// A day labelled with two types counts once under each type and once under
/// its most severe level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyBreakdown {
    pub by_type: BTreeMap<AnomalyType, usize>,
    pub by_severity: BTreeMap<Severity, usize>,
}

impl AnomalyBreakdown {
    /// Count one annotated day; normal days are ignored.
    pub fn record(&mut self, sample: &AnnotatedSample) {
        if let Some(label) = sample.anomaly_type() {
            for anomaly_type in label.types() {
                *self.by_type.entry(*anomaly_type).or_insert(0) += 1;
            }
            *self.by_severity.entry(label.severity()).or_insert(0) += 1;
        }
    }

    pub fn count_of(&self, anomaly_type: AnomalyType) -> usize {
        self.by_type.get(&anomaly_type).copied().unwrap_or(0)
    }

    pub fn count_of_severity(&self, severity: Severity) -> usize {
        self.by_severity.get(&severity).copied().unwrap_or(0)
    }
}
