//! End-to-end analysis configuration.

use serde::{Deserialize, Serialize};

use energy_anomaly_spi::Result;

use crate::config::DetectionConfig;
use crate::window::{NormalizeConfig, SortOrder};

/// Configuration of a full normalize, detect and summarize run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisConfig {
    pub detection: DetectionConfig,
    pub normalize: NormalizeConfig,
    pub order: SortOrder,
}

impl AnalysisConfig {
    pub fn new(detection: DetectionConfig, normalize: NormalizeConfig) -> Self {
        Self {
            detection,
            normalize,
            order: SortOrder::default(),
        }
    }

    /// Return the annotated days latest first.
    pub fn latest_first(mut self) -> Self {
        self.order = SortOrder::Descending;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.detection.validate()?;
        self.normalize.validate()
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
