//! Anomaly classification types.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Closed set of anomaly classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnomalyType {
    /// Nothing was produced on the day
    ZeroGeneration,
    /// Production fell sharply against the trailing average
    SuddenDrop,
    /// Production fell below the fixed minimum
    BelowThreshold,
}

impl AnomalyType {
    /// Wire name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyType::ZeroGeneration => "ZERO_GENERATION",
            AnomalyType::SuddenDrop => "SUDDEN_DROP",
            AnomalyType::BelowThreshold => "BELOW_THRESHOLD",
        }
    }

    /// Severity level shown next to the type.
    pub fn severity(&self) -> Severity {
        match self {
            AnomalyType::ZeroGeneration => Severity::Critical,
            AnomalyType::SuddenDrop => Severity::Warning,
            AnomalyType::BelowThreshold => Severity::Info,
        }
    }
}

impl fmt::Display for AnomalyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity levels, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, de-duplicated, non-empty set of anomaly types attached to a day.
///
/// Most days carry a single type. The combined detector can attach two, in
/// which case the label renders them comma-joined (`SUDDEN_DROP,BELOW_THRESHOLD`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnomalyLabel {
    types: Vec<AnomalyType>,
}

impl AnomalyLabel {
    /// Label with a single type.
    pub fn single(anomaly_type: AnomalyType) -> Self {
        Self {
            types: vec![anomaly_type],
        }
    }

    /// Append a type, keeping insertion order and ignoring duplicates.
    pub fn with(mut self, anomaly_type: AnomalyType) -> Self {
        if !self.types.contains(&anomaly_type) {
            self.types.push(anomaly_type);
        }
        self
    }

    /// Types in insertion order.
    pub fn types(&self) -> &[AnomalyType] {
        &self.types
    }

    /// First type of the label.
    pub fn primary(&self) -> AnomalyType {
        self.types[0]
    }

    pub fn contains(&self, anomaly_type: AnomalyType) -> bool {
        self.types.contains(&anomaly_type)
    }

    /// Most severe level among the label's types.
    pub fn severity(&self) -> Severity {
        self.types
            .iter()
            .map(AnomalyType::severity)
            .max()
            .unwrap_or(Severity::Info)
    }
}

impl From<AnomalyType> for AnomalyLabel {
    fn from(anomaly_type: AnomalyType) -> Self {
        Self::single(anomaly_type)
    }
}

impl fmt::Display for AnomalyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, anomaly_type) in self.types.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(anomaly_type.as_str())?;
        }
        Ok(())
    }
}

impl Serialize for AnomalyLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anomaly_type_display() {
        assert_eq!(AnomalyType::ZeroGeneration.to_string(), "ZERO_GENERATION");
        assert_eq!(AnomalyType::SuddenDrop.to_string(), "SUDDEN_DROP");
        assert_eq!(AnomalyType::BelowThreshold.to_string(), "BELOW_THRESHOLD");
    }

    #[test]
    fn test_anomaly_type_serialize_matches_display() {
        for anomaly_type in [
            AnomalyType::ZeroGeneration,
            AnomalyType::SuddenDrop,
            AnomalyType::BelowThreshold,
        ] {
            let json = serde_json::to_string(&anomaly_type).unwrap();
            assert_eq!(json, format!("\"{}\"", anomaly_type));
        }
    }

    #[test]
    fn test_anomaly_type_deserialize() {
        let parsed: AnomalyType = serde_json::from_str("\"SUDDEN_DROP\"").unwrap();
        assert_eq!(parsed, AnomalyType::SuddenDrop);
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(AnomalyType::ZeroGeneration.severity(), Severity::Critical);
        assert_eq!(AnomalyType::SuddenDrop.severity(), Severity::Warning);
        assert_eq!(AnomalyType::BelowThreshold.severity(), Severity::Info);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
    }

    #[test]
    fn test_severity_serialize() {
        assert_eq!(serde_json::to_string(&Severity::Critical).unwrap(), "\"CRITICAL\"");
        assert_eq!(Severity::Info.to_string(), "INFO");
    }

    #[test]
    fn test_label_single() {
        let label = AnomalyLabel::single(AnomalyType::SuddenDrop);
        assert_eq!(label.types(), &[AnomalyType::SuddenDrop]);
        assert_eq!(label.primary(), AnomalyType::SuddenDrop);
        assert_eq!(label.to_string(), "SUDDEN_DROP");
    }

    #[test]
    fn test_label_with_keeps_order_and_dedups() {
        let label = AnomalyLabel::single(AnomalyType::SuddenDrop)
            .with(AnomalyType::BelowThreshold)
            .with(AnomalyType::SuddenDrop);
        assert_eq!(
            label.types(),
            &[AnomalyType::SuddenDrop, AnomalyType::BelowThreshold]
        );
        assert_eq!(label.to_string(), "SUDDEN_DROP,BELOW_THRESHOLD");
    }

    #[test]
    fn test_label_severity_takes_max() {
        let label = AnomalyLabel::single(AnomalyType::BelowThreshold).with(AnomalyType::SuddenDrop);
        assert_eq!(label.severity(), Severity::Warning);
    }

    #[test]
    fn test_label_serialize_as_string() {
        let label = AnomalyLabel::from(AnomalyType::SuddenDrop).with(AnomalyType::BelowThreshold);
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, "\"SUDDEN_DROP,BELOW_THRESHOLD\"");
    }

    #[test]
    fn test_label_contains() {
        let label = AnomalyLabel::single(AnomalyType::ZeroGeneration);
        assert!(label.contains(AnomalyType::ZeroGeneration));
        assert!(!label.contains(AnomalyType::SuddenDrop));
    }
}
