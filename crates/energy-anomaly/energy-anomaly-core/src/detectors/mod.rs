//! Detector strategies.

mod absolute;
mod combined;
mod window_average;

pub use absolute::AbsoluteDetector;
pub use combined::{merge_findings, CombinedDetector, REASON_SEPARATOR};
pub use window_average::WindowAverageDetector;

use energy_anomaly_api::{DetectionConfig, DetectionMethod};
use energy_anomaly_spi::{Detector, Result};

/// Build the detector selected by `config.method`.
///
/// The whole configuration is validated first, including options the selected
/// method does not read.
pub fn detector_for(config: &DetectionConfig) -> Result<Box<dyn Detector>> {
    config.validate()?;
    let detector: Box<dyn Detector> = match config.method {
        DetectionMethod::WindowAverage => Box::new(WindowAverageDetector::from_config(config)?),
        DetectionMethod::Absolute => Box::new(AbsoluteDetector::from_config(config)?),
        DetectionMethod::Combined => Box::new(CombinedDetector::from_config(config)?),
    };
    Ok(detector)
}
