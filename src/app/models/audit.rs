//! Data model for the removal audit
//!
//! Every row the pipeline discards is recorded here together with the
//! reason it was removed. The audit is built incrementally by the
//! orchestrator and is immutable once the pipeline completes; it is
//! used for reporting and debugging, never for re-inclusion.

use crate::app::models::Observation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reason codes for removed observations
///
/// One variant per filter stage, two for the low-aperture stage (its
/// telescope and binocular sub-predicates are tracked separately), and
/// one for the duplicate-date resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RemovalReason {
    /// No magnitude was reported
    #[serde(rename = "no-mag")]
    NoMagnitude,
    /// Reverse-binocular estimation method
    #[serde(rename = "reverse-binoc")]
    ReverseBinocular,
    /// Observed under poor weather conditions
    #[serde(rename = "poor-weather")]
    PoorWeather,
    /// Improper atmospheric extinction correction
    #[serde(rename = "bad-extinction")]
    BadExtinction,
    /// Telescope observation brighter than the instrument limit
    #[serde(rename = "telescope-low-aperture")]
    TelescopeLowAperture,
    /// Binocular observation brighter than the instrument limit
    #[serde(rename = "binocular-low-aperture")]
    BinocularLowAperture,
    /// Magnitude method outside the accepted set
    #[serde(rename = "unspecified-method")]
    UnspecifiedMethod,
    /// Outdated reference star catalog
    #[serde(rename = "outdated-catalog")]
    OutdatedCatalog,
    /// Same observer reported the same perihelion-relative day twice
    #[serde(rename = "duplicate-dates")]
    DuplicateDates,
}

impl RemovalReason {
    /// All reasons in canonical pipeline order
    pub const ALL: [RemovalReason; 9] = [
        RemovalReason::NoMagnitude,
        RemovalReason::ReverseBinocular,
        RemovalReason::PoorWeather,
        RemovalReason::BadExtinction,
        RemovalReason::TelescopeLowAperture,
        RemovalReason::BinocularLowAperture,
        RemovalReason::UnspecifiedMethod,
        RemovalReason::OutdatedCatalog,
        RemovalReason::DuplicateDates,
    ];

    /// Stable string key used in reports and serialized audits
    pub fn key(&self) -> &'static str {
        match self {
            RemovalReason::NoMagnitude => "no-mag",
            RemovalReason::ReverseBinocular => "reverse-binoc",
            RemovalReason::PoorWeather => "poor-weather",
            RemovalReason::BadExtinction => "bad-extinction",
            RemovalReason::TelescopeLowAperture => "telescope-low-aperture",
            RemovalReason::BinocularLowAperture => "binocular-low-aperture",
            RemovalReason::UnspecifiedMethod => "unspecified-method",
            RemovalReason::OutdatedCatalog => "outdated-catalog",
            RemovalReason::DuplicateDates => "duplicate-dates",
        }
    }

    /// Human-readable description of what the stage removes
    pub fn description(&self) -> &'static str {
        match self {
            RemovalReason::NoMagnitude => "no magnitude reported",
            RemovalReason::ReverseBinocular => "reverse binocular method",
            RemovalReason::PoorWeather => "poor weather conditions",
            RemovalReason::BadExtinction => "improper extinction correction",
            RemovalReason::TelescopeLowAperture => "telescope under magnitude 5.4",
            RemovalReason::BinocularLowAperture => "binoculars under magnitude 1.4",
            RemovalReason::UnspecifiedMethod => "unspecified magnitude method",
            RemovalReason::OutdatedCatalog => "outdated reference star catalog",
            RemovalReason::DuplicateDates => "duplicate date by same observer",
        }
    }
}

impl std::fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Removed observations grouped by reason
///
/// Every reason key is always present with a possibly empty table, so
/// callers never have to distinguish "no removals" from "stage did not
/// report".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovalAudit {
    removed: BTreeMap<RemovalReason, Vec<Observation>>,
}

impl RemovalAudit {
    /// Create an audit with an empty table for every reason
    pub fn new() -> Self {
        let mut removed = BTreeMap::new();
        for reason in RemovalReason::ALL {
            removed.insert(reason, Vec::new());
        }
        Self { removed }
    }

    /// Record a single removed observation
    pub fn record(&mut self, reason: RemovalReason, observation: Observation) {
        self.removed.entry(reason).or_default().push(observation);
    }

    /// Record a batch of removed observations, preserving their order
    pub fn extend(&mut self, reason: RemovalReason, observations: Vec<Observation>) {
        self.removed.entry(reason).or_default().extend(observations);
    }

    /// Observations removed for a given reason
    pub fn removed(&self, reason: RemovalReason) -> &[Observation] {
        self.removed
            .get(&reason)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of observations removed for a given reason
    pub fn count(&self, reason: RemovalReason) -> usize {
        self.removed(reason).len()
    }

    /// Total number of removed observations across all reasons
    pub fn total_removed(&self) -> usize {
        self.removed.values().map(Vec::len).sum()
    }

    /// One-line summary of removal counts per reason, in canonical order
    pub fn summary(&self) -> String {
        let parts: Vec<String> = RemovalReason::ALL
            .iter()
            .map(|reason| format!("{}: {}", reason.key(), self.count(*reason)))
            .collect();
        parts.join(" | ")
    }
}

impl Default for RemovalAudit {
    fn default() -> Self {
        Self::new()
    }
}
