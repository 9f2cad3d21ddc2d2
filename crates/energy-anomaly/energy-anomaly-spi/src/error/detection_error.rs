//! Anomaly detection error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Anomaly detection errors.
///
/// Every variant describes a programmer error (bad configuration or a
/// malformed sample sequence). Data-quality problems in raw records are
/// tolerated by the normalizer and never surface here.
#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Unknown detection method: '{0}' (expected windowAverage, absolute or combined)")]
    UnknownMethod(String),

    #[error("Samples out of order at index {index}: {current} does not follow {previous}")]
    UnorderedSamples {
        index: usize,
        previous: NaiveDate,
        current: NaiveDate,
    },

    #[error("Invalid sample at index {index} ({date}): {value} kWh is negative or not finite")]
    InvalidSample {
        index: usize,
        date: NaiveDate,
        value: f64,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DetectionError {
    /// Shorthand for [`DetectionError::InvalidParameter`].
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for DetectionError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Result type for anomaly detection operations.
pub type Result<T> = std::result::Result<T, DetectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let error = DetectionError::InvalidParameter {
            name: "windowSize".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter: windowSize - must be at least 1"
        );
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let error = DetectionError::invalid_parameter("absoluteThreshold", "must not be negative");
        assert!(matches!(
            error,
            DetectionError::InvalidParameter { ref name, .. } if name == "absoluteThreshold"
        ));
    }

    #[test]
    fn test_invalid_parameter_special_characters() {
        let error = DetectionError::invalid_parameter(
            "windowThresholdPercent",
            "must be in range [0, 100]",
        );
        assert_eq!(
            error.to_string(),
            "Invalid parameter: windowThresholdPercent - must be in range [0, 100]"
        );
    }

    #[test]
    fn test_unknown_method_display() {
        let error = DetectionError::UnknownMethod("zscore".to_string());
        assert_eq!(
            error.to_string(),
            "Unknown detection method: 'zscore' (expected windowAverage, absolute or combined)"
        );
    }

    #[test]
    fn test_unordered_samples_display() {
        let error = DetectionError::UnorderedSamples {
            index: 3,
            previous: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            current: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Samples out of order at index 3: 2024-05-01 does not follow 2024-05-02"
        );
    }

    #[test]
    fn test_invalid_sample_display() {
        let error = DetectionError::InvalidSample {
            index: 1,
            date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            value: -5.0,
        };
        assert_eq!(
            error.to_string(),
            "Invalid sample at index 1 (2024-05-02): -5 kWh is negative or not finite"
        );
    }

    #[test]
    fn test_invalid_config_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let error: DetectionError = json_err.into();
        assert!(error.to_string().starts_with("Invalid configuration: "));
    }

    #[test]
    fn test_error_is_debug() {
        let error = DetectionError::UnknownMethod("x".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("UnknownMethod"));
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<i32> = Err(DetectionError::UnknownMethod(String::new()));
        assert!(matches!(result.unwrap_err(), DetectionError::UnknownMethod(_)));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(DetectionError::InvalidConfig("missing field".to_string()));
        assert!(!error.to_string().is_empty());
    }

    #[test]
    fn test_all_error_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DetectionError>();
    }
}
