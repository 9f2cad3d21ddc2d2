//! Solar Energy Anomaly Detection API
//!
//! Configuration types and builders for the detection pipeline.

mod analysis;
mod config;
mod window;

// Re-export SPI types
pub use energy_anomaly_spi::{AnomalyStats, AnomalyType, DetectionError, Result, Severity};

pub use analysis::AnalysisConfig;
pub use config::{
    DetectionConfig, DetectionMethod, DEFAULT_ABSOLUTE_THRESHOLD, DEFAULT_WINDOW_SIZE,
    DEFAULT_WINDOW_THRESHOLD_PERCENT,
};
pub use window::{NormalizeConfig, SortOrder, WindowPreset, MAX_WINDOW_DAYS};
