//! Column offsets and line slicing for the ICQ 80-column format
//!
//! Byte offsets are part of the external format and fixed: 0-indexed,
//! half-open ranges. The order of `COLUMNS` defines the canonical
//! column order used by all later stages.

use crate::app::models::Observation;
use crate::constants::RECORD_LENGTH;
use crate::{Error, Result};
use std::ops::Range;

/// The 24 fixed byte ranges of an ICQ record, in canonical order
pub const COLUMNS: [(&str, Range<usize>); 24] = [
    ("apparition_label", 0..3),
    ("designation", 3..9),
    ("nucleus_split_flag", 9..10),
    ("year_obs", 11..15),
    ("month_obs", 16..18),
    ("day_obs", 19..24),
    ("special_notes", 25..26),
    ("mag_method", 26..27),
    ("magnitude", 28..32),
    ("poor_conditions_flag", 32..33),
    ("reference_catalog", 33..35),
    ("instrument_aperture", 35..40),
    ("instrument_type", 40..41),
    ("focal_ratio", 41..43),
    ("magnification", 43..47),
    ("coma_diameter_estimate_flag", 48..49),
    ("coma_diameter", 49..54),
    ("central_condensation", 54..55),
    ("degree_of_condensation", 55..57),
    ("tail_length", 58..63),
    ("position_angle_of_tail", 64..67),
    ("icq_publication", 68..74),
    ("special_notes_two", 74..75),
    ("observer_code", 75..80),
];

/// Slice one column out of a raw line, trimming surrounding whitespace
fn slice_column(line: &str, line_number: usize, name: &str, range: &Range<usize>) -> Result<String> {
    let value = line.get(range.clone()).ok_or_else(|| {
        Error::malformed_record(
            line_number,
            format!(
                "column '{}' at bytes {}..{} is not sliceable",
                name, range.start, range.end
            ),
        )
    })?;
    Ok(value.trim().to_string())
}

/// Decode a single fixed-width ICQ line into an observation record
///
/// The line must be at least 80 bytes; shorter lines (or lines whose
/// byte ranges fall outside a UTF-8 character boundary) fail with
/// `Error::MalformedRecord`. Field content is not validated.
pub fn decode_line(line: &str, line_number: usize) -> Result<Observation> {
    if line.len() < RECORD_LENGTH {
        return Err(Error::malformed_record(
            line_number,
            format!(
                "record is {} bytes, expected at least {}",
                line.len(),
                RECORD_LENGTH
            ),
        ));
    }

    let mut values = Vec::with_capacity(COLUMNS.len());
    for (name, range) in &COLUMNS {
        values.push(slice_column(line, line_number, name, range)?);
    }
    let mut fields = values.into_iter();
    // Consumed in COLUMNS order
    Ok(Observation {
        apparition_label: fields.next().unwrap_or_default(),
        designation: fields.next().unwrap_or_default(),
        nucleus_split_flag: fields.next().unwrap_or_default(),
        year_obs: fields.next().unwrap_or_default(),
        month_obs: fields.next().unwrap_or_default(),
        day_obs: fields.next().unwrap_or_default(),
        special_notes: fields.next().unwrap_or_default(),
        mag_method: fields.next().unwrap_or_default(),
        magnitude: fields.next().unwrap_or_default(),
        poor_conditions_flag: fields.next().unwrap_or_default(),
        reference_catalog: fields.next().unwrap_or_default(),
        instrument_aperture: fields.next().unwrap_or_default(),
        instrument_type: fields.next().unwrap_or_default(),
        focal_ratio: fields.next().unwrap_or_default(),
        magnification: fields.next().unwrap_or_default(),
        coma_diameter_estimate_flag: fields.next().unwrap_or_default(),
        coma_diameter: fields.next().unwrap_or_default(),
        central_condensation: fields.next().unwrap_or_default(),
        degree_of_condensation: fields.next().unwrap_or_default(),
        tail_length: fields.next().unwrap_or_default(),
        position_angle_of_tail: fields.next().unwrap_or_default(),
        icq_publication: fields.next().unwrap_or_default(),
        special_notes_two: fields.next().unwrap_or_default(),
        observer_code: fields.next().unwrap_or_default(),
        source_line: line.to_string(),
        observation_datetime: None,
        days_to_perihelion: None,
        heliocentric_corrected_magnitude: None,
    })
}
