//! Heliocentric magnitude correction
//!
//! Derives a corrected magnitude for every surviving row by applying a
//! fixed offset to the raw magnitude. The offset is a documented
//! placeholder approximation rather than a distance-based formula; see
//! [`crate::constants::HELIOCENTRIC_MAG_OFFSET`].

use crate::app::models::Observation;
use crate::constants::HELIOCENTRIC_MAG_OFFSET;
use tracing::{debug, info};

/// Apply the heliocentric correction to a cleaned row set
///
/// When enabled, sets `heliocentric_corrected_magnitude = magnitude +
/// 15.0` on every row whose magnitude parses as a number; rows with an
/// unparseable magnitude keep the field unset. When disabled, rows
/// pass through completely unchanged.
pub fn apply_heliocentric_correction(
    rows: Vec<Observation>,
    enabled: bool,
) -> Vec<Observation> {
    if !enabled {
        info!("Skipping heliocentric correction");
        return rows;
    }

    info!(
        "Applying heliocentric correction of {:+} magnitudes to {} rows",
        HELIOCENTRIC_MAG_OFFSET,
        rows.len()
    );

    rows.into_iter()
        .map(|mut row| {
            match row.magnitude_value() {
                Ok(magnitude) => {
                    row.heliocentric_corrected_magnitude =
                        Some(magnitude + HELIOCENTRIC_MAG_OFFSET);
                }
                Err(_) => {
                    debug!(
                        "Magnitude '{}' by observer {} is not numeric, leaving uncorrected",
                        row.magnitude, row.observer_code
                    );
                }
            }
            row
        })
        .collect()
}
