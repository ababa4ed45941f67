//! Application constants for the ICQ processor
//!
//! This module contains the format constants, instrument code sets,
//! and quality-control thresholds used throughout the pipeline.

// =============================================================================
// ICQ Record Format
// =============================================================================

/// Minimum length in bytes of a decodable ICQ 80-column record
pub const RECORD_LENGTH: usize = 80;

/// Number of columns in the canonical ICQ record layout
pub const COLUMN_COUNT: usize = 24;

// =============================================================================
// Instrument Type Codes
// =============================================================================

/// Instrument type codes as used in ICQ column 41 (0-indexed byte 40)
pub mod instrument_codes {
    /// Codes identifying telescope observations
    pub const TELESCOPE: &[char] = &[
        'C', 'R', 'D', 'I', 'J', 'L', 'M', 'q', 'Q', 'r', 'S', 'T', 'U', 'W', 'Y',
    ];

    /// Codes identifying binocular observations
    pub const BINOCULAR: &[char] = &['A', 'B', 'N', 'O'];
}

// =============================================================================
// Quality Control Thresholds
// =============================================================================

/// Magnitude methods accepted by the unspecified-method filter
///
/// S = sequence, B = binocular estimate, M = comparison method,
/// I = in-focus, E = extrafocal. Anything else is treated as
/// unspecified and removed.
pub const ALLOWED_MAG_METHODS: &[&str] = &["S", "B", "M", "I", "E"];

/// Reference star catalogs considered too outdated for photometry
pub const OUTDATED_CATALOGS: &[&str] = &["SC"];

/// Telescope observations brighter than this magnitude are removed
pub const TELESCOPE_MIN_MAGNITUDE: f64 = 5.4;

/// Binocular observations brighter than this magnitude are removed
pub const BINOCULAR_MIN_MAGNITUDE: f64 = 1.4;

// =============================================================================
// Magnitude Correction
// =============================================================================

/// Fixed offset added to raw magnitudes by the heliocentric correction.
///
/// This is a placeholder approximation, not a distance-based formula;
/// the value is applied uniformly to every surviving observation.
pub const HELIOCENTRIC_MAG_OFFSET: f64 = 15.0;

// =============================================================================
// Date Handling
// =============================================================================

/// Expected format of the perihelion date construction parameter
pub const PERIHELION_DATE_FORMAT: &str = "%Y-%m-%d";

/// Seconds per day, used for floored whole-day offsets from perihelion
pub const SECONDS_PER_DAY: i64 = 86_400;
