//! Configuration for the catalog cleaning pipeline.
//!
//! Provides the construction parameters the pipeline is built from:
//! the perihelion date that anchors day-offset calculations and the
//! boolean toggles controlling which processing phases run.

use crate::constants::PERIHELION_DATE_FORMAT;
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Configuration for a single catalog cleaning run
///
/// The perihelion date is parsed once at construction time from the
/// `YYYY-MM-DD` form supplied by the caller; every later day-offset
/// computation works from the parsed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Perihelion date of the apparition, time-zero for day offsets
    pub perihelion: NaiveDate,

    /// Run the general sorting and filtering pipeline
    ///
    /// When disabled the pipeline is a pass-through and no removal
    /// audit is produced.
    pub general_sorting: bool,

    /// Apply the heliocentric magnitude correction to surviving rows
    pub heliocentric_correction: bool,

    /// Generate light-curve plots (accepted, currently unused)
    pub generate_plots: bool,

    /// Run Monte Carlo fitting (accepted, currently unused)
    pub run_monte_carlo: bool,
}

impl PipelineConfig {
    /// Create a configuration from a `YYYY-MM-DD` perihelion date
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the date string does not
    /// parse in the expected format.
    pub fn new(perihelion_date: &str) -> Result<Self> {
        let perihelion = NaiveDate::parse_from_str(perihelion_date, PERIHELION_DATE_FORMAT)
            .map_err(|e| {
                Error::configuration(format!(
                    "Invalid perihelion date '{}' (expected YYYY-MM-DD): {}",
                    perihelion_date, e
                ))
            })?;

        Ok(Self {
            perihelion,
            general_sorting: true,
            heliocentric_correction: true,
            generate_plots: true,
            run_monte_carlo: true,
        })
    }

    /// Disable the general sorting and filtering pipeline
    pub fn without_general_sorting(mut self) -> Self {
        self.general_sorting = false;
        self
    }

    /// Disable the heliocentric magnitude correction
    pub fn without_heliocentric_correction(mut self) -> Self {
        self.heliocentric_correction = false;
        self
    }

    /// Set the plot generation toggle
    pub fn with_plots(mut self, enabled: bool) -> Self {
        self.generate_plots = enabled;
        self
    }

    /// Set the Monte Carlo fitting toggle
    pub fn with_monte_carlo(mut self, enabled: bool) -> Self {
        self.run_monte_carlo = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parses_perihelion_date() {
        let config = PipelineConfig::new("2020-07-03").unwrap();
        assert_eq!(
            config.perihelion,
            NaiveDate::from_ymd_opt(2020, 7, 3).unwrap()
        );
        assert!(config.general_sorting);
        assert!(config.heliocentric_correction);
    }

    #[test]
    fn test_config_rejects_bad_date() {
        assert!(PipelineConfig::new("03/07/2020").is_err());
        assert!(PipelineConfig::new("2020-13-01").is_err());
        assert!(PipelineConfig::new("").is_err());
    }

    #[test]
    fn test_config_builders() {
        let config = PipelineConfig::new("1997-04-01")
            .unwrap()
            .without_general_sorting()
            .without_heliocentric_correction()
            .with_plots(false)
            .with_monte_carlo(false);

        assert!(!config.general_sorting);
        assert!(!config.heliocentric_correction);
        assert!(!config.generate_plots);
        assert!(!config.run_monte_carlo);
    }
}
