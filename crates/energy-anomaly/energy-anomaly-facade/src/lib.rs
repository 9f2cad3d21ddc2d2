//! Solar Energy Anomaly Detection Facade
//!
//! Unified re-exports for the energy anomaly detection module.
//!
//! This facade provides a single entry point to all detection functionality:
//! - `Detector` trait, data model and `DetectionError` from SPI
//! - Configuration types from API
//! - Normalizer, detectors (`WindowAverageDetector`, `AbsoluteDetector`,
//!   `CombinedDetector`) and the `analyze` pipeline from Core

// Re-export everything from SPI
pub use energy_anomaly_spi::*;

// Re-export everything from API
pub use energy_anomaly_api::*;

// Re-export everything from Core
pub use energy_anomaly_core::*;
