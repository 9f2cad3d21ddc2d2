//! Detector trait definition.

use crate::model::{AnnotatedSample, Finding, Sample};

/// Anomaly detection strategy.
///
/// A detector is configured once and then applied to any number of
/// chronological sample sequences. Implementations hold no mutable state, so a
/// single instance can be shared between threads.
pub trait Detector: Send + Sync {
    /// Strategy name, matching the configuration method it was built from.
    fn name(&self) -> &'static str;

    /// Evaluate the sample at `index`.
    ///
    /// `samples` is the full sequence in ascending date order. Implementations
    /// must not read any sample after `index`.
    fn evaluate(&self, samples: &[Sample], index: usize) -> Option<Finding>;

    /// Annotate every sample of a chronological sequence.
    fn detect(&self, samples: &[Sample]) -> Vec<AnnotatedSample> {
        samples
            .iter()
            .enumerate()
            .map(|(index, sample)| match self.evaluate(samples, index) {
                Some(finding) => AnnotatedSample::flagged(sample.clone(), finding),
                None => AnnotatedSample::normal(sample.clone()),
            })
            .collect()
    }
}
