//! Detection results attached to samples.

use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::{AnomalyLabel, AnomalyType, Sample, Severity};

/// What a detector rule found on one sample: the classification and a
/// complete, display-ready sentence explaining it.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub label: AnomalyLabel,
    pub reason: String,
}

impl Finding {
    /// Finding with a single anomaly type.
    pub fn new(anomaly_type: AnomalyType, reason: impl Into<String>) -> Self {
        Self {
            label: AnomalyLabel::single(anomaly_type),
            reason: reason.into(),
        }
    }

    /// Finding with a prepared label.
    pub fn with_label(label: AnomalyLabel, reason: impl Into<String>) -> Self {
        Self {
            label,
            reason: reason.into(),
        }
    }
}

/// A sample extended with detection results.
///
/// Built either as a normal day or from a [`Finding`], so the anomaly type and
/// reason are present exactly when the day is flagged.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedSample {
    sample: Sample,
    finding: Option<Finding>,
}

impl AnnotatedSample {
    /// A day with no anomaly.
    pub fn normal(sample: Sample) -> Self {
        Self {
            sample,
            finding: None,
        }
    }

    /// A flagged day.
    pub fn flagged(sample: Sample, finding: Finding) -> Self {
        Self {
            sample,
            finding: Some(finding),
        }
    }

    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    pub fn date(&self) -> NaiveDate {
        self.sample.date
    }

    /// Three-letter weekday label.
    pub fn day(&self) -> &'static str {
        self.sample.day_label()
    }

    pub fn total_energy(&self) -> f64 {
        self.sample.total_energy
    }

    pub fn has_anomaly(&self) -> bool {
        self.finding.is_some()
    }

    pub fn finding(&self) -> Option<&Finding> {
        self.finding.as_ref()
    }

    pub fn anomaly_type(&self) -> Option<&AnomalyLabel> {
        self.finding.as_ref().map(|f| &f.label)
    }

    pub fn anomaly_reason(&self) -> Option<&str> {
        self.finding.as_ref().map(|f| f.reason.as_str())
    }

    pub fn severity(&self) -> Option<Severity> {
        self.finding.as_ref().map(|f| f.label.severity())
    }

    /// Split back into the sample and its finding.
    pub fn into_parts(self) -> (Sample, Option<Finding>) {
        (self.sample, self.finding)
    }
}

impl Serialize for AnnotatedSample {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.finding.is_some() { 7 } else { 4 };
        let mut state = serializer.serialize_struct("AnnotatedSample", len)?;
        state.serialize_field("date", &self.sample.date)?;
        state.serialize_field("day", self.day())?;
        state.serialize_field("totalEnergy", &self.sample.total_energy)?;
        state.serialize_field("hasAnomaly", &self.has_anomaly())?;
        if let Some(finding) = &self.finding {
            state.serialize_field("anomalyType", &finding.label)?;
            state.serialize_field("anomalyReason", &finding.reason)?;
            state.serialize_field("severity", &finding.label.severity())?;
        }
        state.end()
    }
}
