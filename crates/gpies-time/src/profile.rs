//! Labelled timing samples from repeated runs

use gpies_core::GpFloat;
use tracing::debug;

use crate::measure;

/// One timed run
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileSample {
    pub label: String,
    pub seconds: GpFloat,
}

/// Collects timings of repeated runs, e.g. one simulation per problem size.
#[derive(Clone, Debug, Default)]
pub struct Profile {
    samples: Vec<ProfileSample>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a timing taken elsewhere
    pub fn record(&mut self, label: impl Into<String>, seconds: GpFloat) {
        let label = label.into();
        debug!(label = %label, seconds = seconds as f64, "profile sample");
        self.samples.push(ProfileSample { label, seconds });
    }

    /// Time a closure and record it under `label`
    pub fn time<T>(&mut self, label: impl Into<String>, f: impl FnOnce() -> T) -> T {
        let (value, seconds) = measure(f);
        self.record(label, seconds);
        value
    }

    pub fn samples(&self) -> &[ProfileSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sum of all samples
    pub fn total(&self) -> GpFloat {
        self.samples.iter().map(|s| s.seconds).sum()
    }

    pub fn mean(&self) -> Option<GpFloat> {
        if self.samples.is_empty() {
            None
        } else {
            Some(self.total() / self.samples.len() as GpFloat)
        }
    }

    /// Fastest sample
    pub fn min(&self) -> Option<&ProfileSample> {
        self.samples
            .iter()
            .min_by(|a, b| a.seconds.total_cmp(&b.seconds))
    }

    /// Slowest sample
    pub fn max(&self) -> Option<&ProfileSample> {
        self.samples
            .iter()
            .max_by(|a, b| a.seconds.total_cmp(&b.seconds))
    }
}
