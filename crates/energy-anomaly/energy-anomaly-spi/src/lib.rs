//! Solar Energy Anomaly Detection Service Provider Interface
//!
//! Defines the detector contract, the data model shared by every stage of the
//! pipeline, and the error type.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::Detector;
pub use error::{DetectionError, Result};
pub use model::{
    AnnotatedSample, AnomalyBreakdown, AnomalyLabel, AnomalyStats, AnomalyType, Finding,
    RawPayload, RawRecord, Sample, Severity,
};
