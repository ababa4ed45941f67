//! Pipeline orchestrator
//!
//! Runs the decoded catalog through sorting, the quality filters and
//! duplicate-date resolution in a fixed order, collecting every removed
//! row into a per-reason audit.

use crate::app::models::{Observation, RemovalAudit, RemovalReason};
use crate::app::services::pipeline::correction::apply_heliocentric_correction;
use crate::app::services::pipeline::deduplication::{
    resolve_duplicate_dates, sort_by_observer_and_date,
};
use crate::app::services::pipeline::filters;
use crate::app::services::pipeline::stats::{PipelineResult, ProcessingStats};
use crate::config::PipelineConfig;
use crate::Result;
use tracing::info;

/// Drives a decoded ICQ catalog through the cleaning stages
pub struct CatalogCleaner {
    config: PipelineConfig,
}

impl CatalogCleaner {
    /// Create a cleaner with the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run the full cleaning pipeline over the decoded rows
    ///
    /// Stage order is fixed: sort, magnitude presence, reverse binocular,
    /// poor weather, bad extinction, low aperture, magnitude method,
    /// outdated catalog, duplicate dates. With sorting disabled the rows
    /// pass through untouched and no audit is produced.
    pub fn run(&self, rows: Vec<Observation>) -> Result<PipelineResult> {
        let total_input = rows.len();

        if !self.config.general_sorting {
            info!("General sorting disabled, returning rows unprocessed");
            return Ok(PipelineResult {
                observations: rows,
                audit: None,
                stats: ProcessingStats {
                    total_input,
                    filtered: 0,
                    deduplicated: 0,
                    final_output: total_input,
                },
            });
        }

        info!("CatalogCleaner: processing {} observations", total_input);
        let mut audit = RemovalAudit::new();

        let rows = sort_by_observer_and_date(rows)?;

        let (rows, removed) = filters::remove_no_magnitude(rows);
        audit.extend(RemovalReason::NoMagnitude, removed);

        let (rows, removed) = filters::remove_reverse_binocular(rows);
        audit.extend(RemovalReason::ReverseBinocular, removed);

        let (rows, removed) = filters::remove_poor_weather(rows);
        audit.extend(RemovalReason::PoorWeather, removed);

        let (rows, removed) = filters::remove_bad_extinction(rows);
        audit.extend(RemovalReason::BadExtinction, removed);

        let (rows, telescope_removed, binocular_removed) =
            filters::remove_low_aperture(rows)?;
        audit.extend(RemovalReason::TelescopeLowAperture, telescope_removed);
        audit.extend(RemovalReason::BinocularLowAperture, binocular_removed);

        let (rows, removed) = filters::remove_unspecified_method(rows);
        audit.extend(RemovalReason::UnspecifiedMethod, removed);

        let (rows, removed) = filters::remove_outdated_catalog(rows);
        audit.extend(RemovalReason::OutdatedCatalog, removed);

        let filtered = audit.total_removed();

        let (rows, removed) =
            resolve_duplicate_dates(rows, self.config.perihelion)?;
        let deduplicated = removed.len();
        audit.extend(RemovalReason::DuplicateDates, removed);

        let stats = ProcessingStats {
            total_input,
            filtered,
            deduplicated,
            final_output: rows.len(),
        };
        info!("{}", stats.summary());

        Ok(PipelineResult {
            observations: rows,
            audit: Some(audit),
            stats,
        })
    }

    /// Apply the heliocentric correction according to the configuration
    pub fn shift_magnitudes(&self, rows: Vec<Observation>) -> Vec<Observation> {
        apply_heliocentric_correction(rows, self.config.heliocentric_correction)
    }
}
