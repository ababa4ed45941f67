//! Pipeline output container and run statistics

use crate::app::models::{Observation, RemovalAudit};
use crate::{Error, Result};
use serde::Serialize;

/// Counts gathered over a single pipeline run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessingStats {
    /// Rows handed to the pipeline
    pub total_input: usize,
    /// Rows removed by the quality filters
    pub filtered: usize,
    /// Rows removed by duplicate-date resolution
    pub deduplicated: usize,
    /// Rows surviving the full pipeline
    pub final_output: usize,
}

impl ProcessingStats {
    /// Fraction of input rows that survived, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_input == 0 {
            return 0.0;
        }
        (self.final_output as f64 / self.total_input as f64) * 100.0
    }

    /// One-line human summary of the run
    pub fn summary(&self) -> String {
        format!(
            "{} observations in, {} filtered, {} duplicate dates removed, {} out ({:.1}% retained)",
            self.total_input,
            self.filtered,
            self.deduplicated,
            self.final_output,
            self.success_rate()
        )
    }
}

/// Everything a pipeline run produces
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Surviving observations, in observer-then-date order
    pub observations: Vec<Observation>,
    /// Per-reason removal buckets; `None` when cleaning was skipped
    pub audit: Option<RemovalAudit>,
    /// Run counters
    pub stats: ProcessingStats,
}

impl PipelineResult {
    /// Access the removal audit
    ///
    /// Fails with [`Error::MissingAudit`] when the run skipped cleaning
    /// and therefore recorded no removals.
    pub fn audit(&self) -> Result<&RemovalAudit> {
        self.audit.as_ref().ok_or(Error::MissingAudit)
    }
}
