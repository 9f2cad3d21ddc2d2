//! Contract definitions for anomaly detection.
//!
//! This module contains trait definitions that detector strategies must implement.

mod detector;

pub use detector::Detector;
