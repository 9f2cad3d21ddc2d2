//! Solar Energy Anomaly Detection Core
//!
//! Implementations for normalization, detection and summary statistics.

mod detectors;
mod normalizer;
mod pipeline;
mod stats;

pub use detectors::*;
pub use normalizer::*;
pub use pipeline::*;
pub use stats::*;
