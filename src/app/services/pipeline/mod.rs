//! Quality-control pipeline for decoded ICQ observations
//!
//! This module provides the complete cleaning pipeline that runs after
//! record decoding. It applies a fixed chain of removal filters,
//! collapses same-observer/same-day duplicates, and exposes the
//! heliocentric magnitude correction, while building a removal audit of
//! everything discarded.
//!
//! # Architecture
//!
//! - [`processor`] - `CatalogCleaner` and pipeline orchestration
//! - [`filters`] - the seven predicate-based removal stages
//! - [`deduplication`] - sorting, perihelion offsets, duplicate-date resolution
//! - [`correction`] - heliocentric magnitude correction
//! - [`stats`] - processing statistics and the pipeline result pair
//!
//! # Stage order
//!
//! The orchestrator runs stages in a fixed, order-sensitive sequence:
//! sort, no-magnitude, reverse-binocular, poor-weather, bad-extinction,
//! low-aperture, unspecified-method, outdated-catalog, duplicate-date
//! resolution. Later stages only ever see rows that survived all
//! earlier stages; in particular the magnitude-comparing low-aperture
//! stage relies on the no-magnitude filter having already run.
//!
//! Every stage is a pure function from an input sequence to a strict
//! partition (kept, removed); nothing is mutated in place except the
//! three derived-field insertions during duplicate resolution and
//! correction.

pub mod correction;
pub mod deduplication;
pub mod filters;
pub mod processor;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use processor::CatalogCleaner;
pub use stats::{PipelineResult, ProcessingStats};

// Re-export stage functions that are useful standalone
pub use correction::apply_heliocentric_correction;
pub use deduplication::{resolve_duplicate_dates, sort_by_observer_and_date};
