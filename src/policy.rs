use crate::error::FastxError;
use std::path::PathBuf;

/// Where records failing the quality filter are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    pub path: PathBuf,
}

impl SinkConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Caller-owned scan counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Candidate records seen, before sampling and filtering.
    pub total: u64,
    /// Records handed to the consumer.
    pub pass: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Keep each candidate with this probability, in `(0, 1]`.
    pub sample: Option<f64>,
    /// Withhold FASTQ records whose mean quality is below this (ignored if not positive).
    pub min_qual: Option<f64>,
    pub sink: Option<SinkConfig>,
    /// Seed for the sampling RNG; entropy-seeded when unset.
    pub seed: Option<u64>,
}

impl ScanOptions {
    pub(crate) fn validate(&self) -> Result<(), FastxError> {
        match self.sample {
            Some(p) if !(p > 0.0 && p <= 1.0) => Err(FastxError::InvalidSample(p)),
            _ => Ok(()),
        }
    }

    #[inline]
    pub(crate) fn quality_threshold(&self) -> Option<f64> {
        self.min_qual.filter(|&q| q > 0.0)
    }
}
