//! Error types for anomaly detection.
//!
//! This module contains error types and the Result alias.

mod detection_error;

pub use detection_error::{DetectionError, Result};
