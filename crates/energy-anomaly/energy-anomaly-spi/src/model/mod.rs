//! Data models for anomaly detection.
//!
//! This module contains data structures used throughout the detection pipeline.

mod annotated_sample;
mod anomaly_type;
mod raw_record;
mod sample;
mod stats;

pub use annotated_sample::{AnnotatedSample, Finding};
pub use anomaly_type::{AnomalyLabel, AnomalyType, Severity};
pub use raw_record::{RawPayload, RawRecord};
pub use sample::Sample;
pub use stats::{AnomalyBreakdown, AnomalyStats};
