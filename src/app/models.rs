//! Data models for ICQ catalog processing
//!
//! This module contains the core observation record structure decoded
//! from the ICQ 80-column format, together with the typed accessors and
//! predicate helpers the quality-control pipeline is built on.

pub mod audit;

pub use audit::{RemovalAudit, RemovalReason};

use crate::constants::{ALLOWED_MAG_METHODS, OUTDATED_CATALOGS, instrument_codes};
use crate::{Error, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single decoded ICQ observation record
///
/// All 24 raw fields are stored exactly as sliced from the fixed-width
/// line, trimmed of surrounding whitespace but otherwise unvalidated.
/// Content problems (non-numeric magnitudes, bad dates) surface through
/// the typed accessors when a pipeline stage actually needs the value.
///
/// The three derived fields are `None` until the corresponding
/// processing stage runs; no other field is ever mutated after decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Short-period apparition label (bytes 0..3)
    pub apparition_label: String,

    /// Comet designation (bytes 3..9)
    pub designation: String,

    /// Split-nucleus flag (byte 9)
    pub nucleus_split_flag: String,

    /// Observation year (bytes 11..15)
    pub year_obs: String,

    /// Observation month (bytes 16..18)
    pub month_obs: String,

    /// Observation day with fractional time-of-day (bytes 19..24)
    pub day_obs: String,

    /// First special-notes character (byte 25)
    pub special_notes: String,

    /// Magnitude method code (byte 26)
    pub mag_method: String,

    /// Visual magnitude estimate, may be empty (bytes 28..32)
    pub magnitude: String,

    /// Poor-conditions flag, `:` when conditions were poor (byte 32)
    pub poor_conditions_flag: String,

    /// Reference star catalog code (bytes 33..35)
    pub reference_catalog: String,

    /// Instrument aperture in centimeters (bytes 35..40)
    pub instrument_aperture: String,

    /// Instrument type code, telescope or binocular (byte 40)
    pub instrument_type: String,

    /// Focal ratio (bytes 41..43)
    pub focal_ratio: String,

    /// Magnification (bytes 43..47)
    pub magnification: String,

    /// Coma-diameter-estimate flag (byte 48)
    pub coma_diameter_estimate_flag: String,

    /// Coma diameter in arcminutes (bytes 49..54)
    pub coma_diameter: String,

    /// Central condensation (byte 54)
    pub central_condensation: String,

    /// Degree of condensation (bytes 55..57)
    pub degree_of_condensation: String,

    /// Tail length in degrees (bytes 58..63)
    pub tail_length: String,

    /// Position angle of the tail (bytes 64..67)
    pub position_angle_of_tail: String,

    /// ICQ publication reference (bytes 68..74)
    pub icq_publication: String,

    /// Second special-notes character (byte 74)
    pub special_notes_two: String,

    /// Observer code (bytes 75..80)
    pub observer_code: String,

    /// The original 80-column line this record was decoded from
    pub source_line: String,

    /// Absolute observation timestamp, built during duplicate resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation_datetime: Option<NaiveDateTime>,

    /// Signed whole-day offset from perihelion, built during duplicate resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_to_perihelion: Option<i64>,

    /// Heliocentric corrected magnitude, set by the correction stage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heliocentric_corrected_magnitude: Option<f64>,
}

impl Observation {
    /// Parse the raw magnitude field as a number
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidField` when the field is empty or not a
    /// parseable number. Stages comparing magnitudes expect the
    /// no-magnitude filter to have run first.
    pub fn magnitude_value(&self) -> Result<f64> {
        self.magnitude
            .parse::<f64>()
            .map_err(|e| Error::invalid_field("magnitude", &self.magnitude, e.to_string()))
    }

    /// Parse the raw instrument aperture field as centimeters
    pub fn aperture_value(&self) -> Result<f64> {
        self.instrument_aperture.parse::<f64>().map_err(|e| {
            Error::invalid_field("instrument_aperture", &self.instrument_aperture, e.to_string())
        })
    }

    /// Parse the raw observation year
    pub fn year(&self) -> Result<i32> {
        self.year_obs
            .parse::<i32>()
            .map_err(|e| Error::invalid_field("year_obs", &self.year_obs, e.to_string()))
    }

    /// Parse the raw observation month
    pub fn month(&self) -> Result<u32> {
        self.month_obs
            .parse::<u32>()
            .map_err(|e| Error::invalid_field("month_obs", &self.month_obs, e.to_string()))
    }

    /// Parse the raw fractional observation day
    pub fn day(&self) -> Result<f64> {
        self.day_obs
            .parse::<f64>()
            .map_err(|e| Error::invalid_field("day_obs", &self.day_obs, e.to_string()))
    }

    /// Check whether a magnitude was reported at all
    pub fn has_magnitude(&self) -> bool {
        !self.magnitude.is_empty()
    }

    /// Check whether either special-notes field marks a reverse-binocular estimate
    pub fn is_reverse_binocular(&self) -> bool {
        self.special_notes == "r" || self.special_notes_two == "r"
    }

    /// Check whether either special-notes field marks an improper extinction correction
    pub fn is_bad_extinction(&self) -> bool {
        self.special_notes == "&" || self.special_notes_two == "&"
    }

    /// Check whether the observation was made under poor conditions
    pub fn is_poor_weather(&self) -> bool {
        self.poor_conditions_flag == ":"
    }

    /// Check whether the instrument type code identifies a telescope
    pub fn is_telescope(&self) -> bool {
        self.instrument_type
            .chars()
            .next()
            .is_some_and(|c| instrument_codes::TELESCOPE.contains(&c))
    }

    /// Check whether the instrument type code identifies binoculars
    pub fn is_binocular(&self) -> bool {
        self.instrument_type
            .chars()
            .next()
            .is_some_and(|c| instrument_codes::BINOCULAR.contains(&c))
    }

    /// Check whether the magnitude method is one of the accepted codes
    pub fn uses_allowed_mag_method(&self) -> bool {
        ALLOWED_MAG_METHODS.contains(&self.mag_method.as_str())
    }

    /// Check whether the reference star catalog is outdated
    pub fn uses_outdated_catalog(&self) -> bool {
        OUTDATED_CATALOGS.contains(&self.reference_catalog.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_observation() -> Observation {
        Observation {
            apparition_label: String::new(),
            designation: "1995O1".to_string(),
            nucleus_split_flag: String::new(),
            year_obs: "1997".to_string(),
            month_obs: "3".to_string(),
            day_obs: "12.53".to_string(),
            special_notes: String::new(),
            mag_method: "S".to_string(),
            magnitude: "7.5".to_string(),
            poor_conditions_flag: String::new(),
            reference_catalog: "TK".to_string(),
            instrument_aperture: "20.0".to_string(),
            instrument_type: "L".to_string(),
            focal_ratio: String::new(),
            magnification: String::new(),
            coma_diameter_estimate_flag: String::new(),
            coma_diameter: String::new(),
            central_condensation: String::new(),
            degree_of_condensation: String::new(),
            tail_length: String::new(),
            position_angle_of_tail: String::new(),
            icq_publication: String::new(),
            special_notes_two: String::new(),
            observer_code: "OBS01".to_string(),
            source_line: String::new(),
            observation_datetime: None,
            days_to_perihelion: None,
            heliocentric_corrected_magnitude: None,
        }
    }

    #[test]
    fn test_numeric_accessors() {
        let obs = blank_observation();
        assert_eq!(obs.magnitude_value().unwrap(), 7.5);
        assert_eq!(obs.aperture_value().unwrap(), 20.0);
        assert_eq!(obs.year().unwrap(), 1997);
        assert_eq!(obs.month().unwrap(), 3);
        assert_eq!(obs.day().unwrap(), 12.53);
    }

    #[test]
    fn test_invalid_magnitude_is_an_error() {
        let mut obs = blank_observation();
        obs.magnitude = "bright".to_string();
        assert!(matches!(
            obs.magnitude_value(),
            Err(Error::InvalidField { field: "magnitude", .. })
        ));

        obs.magnitude = String::new();
        assert!(!obs.has_magnitude());
        assert!(obs.magnitude_value().is_err());
    }

    #[test]
    fn test_special_note_predicates() {
        let mut obs = blank_observation();
        assert!(!obs.is_reverse_binocular());
        assert!(!obs.is_bad_extinction());

        obs.special_notes = "r".to_string();
        assert!(obs.is_reverse_binocular());

        obs.special_notes = String::new();
        obs.special_notes_two = "&".to_string();
        assert!(obs.is_bad_extinction());
    }

    #[test]
    fn test_instrument_classification() {
        let mut obs = blank_observation();
        assert!(obs.is_telescope()); // 'L'
        assert!(!obs.is_binocular());

        obs.instrument_type = "B".to_string();
        assert!(obs.is_binocular());
        assert!(!obs.is_telescope());

        obs.instrument_type = "E".to_string();
        assert!(!obs.is_binocular());
        assert!(!obs.is_telescope());

        obs.instrument_type = String::new();
        assert!(!obs.is_binocular());
        assert!(!obs.is_telescope());
    }

    #[test]
    fn test_method_and_catalog_predicates() {
        let mut obs = blank_observation();
        assert!(obs.uses_allowed_mag_method());
        assert!(!obs.uses_outdated_catalog());

        obs.mag_method = "X".to_string();
        assert!(!obs.uses_allowed_mag_method());

        obs.reference_catalog = "SC".to_string();
        assert!(obs.uses_outdated_catalog());
    }

    #[test]
    fn test_audit_types_re_exported() {
        // RemovalAudit and RemovalReason are reachable from the models
        // module directly, not only through models::audit
        let audit = RemovalAudit::new();
        assert_eq!(audit.count(RemovalReason::NoMagnitude), 0);
    }

    #[test]
    fn test_poor_weather_flag() {
        let mut obs = blank_observation();
        assert!(!obs.is_poor_weather());
        obs.poor_conditions_flag = ":".to_string();
        assert!(obs.is_poor_weather());
    }
}
