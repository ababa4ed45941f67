//! Predicate-based removal filters
//!
//! Each filter scans the row set once and splits it into a strict
//! partition: rows to keep and rows to remove, both preserving the
//! relative order of the input. No filter mutates a row.

use crate::Result;
use crate::app::models::Observation;
use crate::constants::{BINOCULAR_MIN_MAGNITUDE, TELESCOPE_MIN_MAGNITUDE};
use tracing::{debug, info};

/// Partition rows by a removal predicate, preserving relative order
///
/// Returns `(kept, removed)`; every input row lands in exactly one of
/// the two outputs.
pub fn partition<F>(rows: Vec<Observation>, remove: F) -> (Vec<Observation>, Vec<Observation>)
where
    F: Fn(&Observation) -> bool,
{
    let mut kept = Vec::with_capacity(rows.len());
    let mut removed = Vec::new();

    for row in rows {
        if remove(&row) {
            removed.push(row);
        } else {
            kept.push(row);
        }
    }

    (kept, removed)
}

/// Remove rows that report no magnitude at all
pub fn remove_no_magnitude(rows: Vec<Observation>) -> (Vec<Observation>, Vec<Observation>) {
    info!("Removing points with no reported magnitude.");
    partition(rows, |row| !row.has_magnitude())
}

/// Remove rows estimated with a reverse binocular method
pub fn remove_reverse_binocular(rows: Vec<Observation>) -> (Vec<Observation>, Vec<Observation>) {
    info!("Removing points that use a reverse binocular method.");
    partition(rows, Observation::is_reverse_binocular)
}

/// Remove rows taken under poor weather conditions
pub fn remove_poor_weather(rows: Vec<Observation>) -> (Vec<Observation>, Vec<Observation>) {
    info!("Removing points that were taken under poor weather conditions.");
    partition(rows, Observation::is_poor_weather)
}

/// Remove rows flagged for an improper extinction correction
pub fn remove_bad_extinction(rows: Vec<Observation>) -> (Vec<Observation>, Vec<Observation>) {
    info!("Removing points that indicated an improper extinction correction was performed.");
    partition(rows, Observation::is_bad_extinction)
}

/// Remove rows whose magnitude method is not in the accepted set
pub fn remove_unspecified_method(rows: Vec<Observation>) -> (Vec<Observation>, Vec<Observation>) {
    info!("Removing points that used an unspecified magnitude method.");
    partition(rows, |row| !row.uses_allowed_mag_method())
}

/// Remove rows measured against an outdated reference star catalog
pub fn remove_outdated_catalog(rows: Vec<Observation>) -> (Vec<Observation>, Vec<Observation>) {
    info!("Removing points which used an outdated reference star catalog.");
    partition(rows, Observation::uses_outdated_catalog)
}

/// Remove bright-limit violations for telescopes and binoculars
///
/// Telescope observations brighter than magnitude 5.4 and binocular
/// observations brighter than magnitude 1.4 are unreliable estimates
/// for those instruments and are removed. The two sub-predicates are
/// audited separately, so this stage returns
/// `(kept, removed_telescope, removed_binocular)`.
///
/// # Errors
///
/// Rows reaching this stage must carry a numeric magnitude; a
/// non-parseable magnitude is `Error::InvalidField`. In the standard
/// pipeline order the no-magnitude filter has already run.
pub fn remove_low_aperture(
    rows: Vec<Observation>,
) -> Result<(Vec<Observation>, Vec<Observation>, Vec<Observation>)> {
    info!(
        "Removing points which used a telescope under a magnitude of {} or binoculars under a magnitude of {}.",
        TELESCOPE_MIN_MAGNITUDE, BINOCULAR_MIN_MAGNITUDE
    );

    let mut kept = Vec::with_capacity(rows.len());
    let mut removed_telescope = Vec::new();
    let mut removed_binocular = Vec::new();

    for row in rows {
        if row.is_telescope() && row.magnitude_value()? < TELESCOPE_MIN_MAGNITUDE {
            debug!(
                "Removing telescope observation by {} at magnitude {}",
                row.observer_code, row.magnitude
            );
            removed_telescope.push(row);
        } else if row.is_binocular() && row.magnitude_value()? < BINOCULAR_MIN_MAGNITUDE {
            debug!(
                "Removing binocular observation by {} at magnitude {}",
                row.observer_code, row.magnitude
            );
            removed_binocular.push(row);
        } else {
            kept.push(row);
        }
    }

    Ok((kept, removed_telescope, removed_binocular))
}
