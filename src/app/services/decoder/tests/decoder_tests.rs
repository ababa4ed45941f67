//! Tests for line decoding and column slicing

use super::build_line;
use crate::Error;
use crate::app::services::decoder::{decode_catalog, decode_line};
use crate::app::services::decoder::fields::COLUMNS;
use crate::constants::COLUMN_COUNT;

#[test]
fn test_decode_line_round_trips_known_fields() {
    let line = build_line(&[
        (0..3, "  9"),
        (3..9, "1995O1"),
        (9..10, "s"),
        (11..15, "1997"),
        (16..18, " 3"),
        (19..24, "12.53"),
        (25..26, "r"),
        (26..27, "S"),
        (28..32, " 7.5"),
        (32..33, ":"),
        (33..35, "SC"),
        (35..40, " 20.0"),
        (40..41, "L"),
        (41..43, " 5"),
        (43..47, "  63"),
        (48..49, "d"),
        (49..54, " 12.0"),
        (54..55, "/"),
        (55..57, " 5"),
        (58..63, " 0.25"),
        (64..67, "270"),
        (68..74, "ICQ 84"),
        (74..75, "&"),
        (75..80, "AAA01"),
    ]);

    let obs = decode_line(&line, 1).unwrap();

    assert_eq!(obs.apparition_label, "9");
    assert_eq!(obs.designation, "1995O1");
    assert_eq!(obs.nucleus_split_flag, "s");
    assert_eq!(obs.year_obs, "1997");
    assert_eq!(obs.month_obs, "3");
    assert_eq!(obs.day_obs, "12.53");
    assert_eq!(obs.special_notes, "r");
    assert_eq!(obs.mag_method, "S");
    assert_eq!(obs.magnitude, "7.5");
    assert_eq!(obs.poor_conditions_flag, ":");
    assert_eq!(obs.reference_catalog, "SC");
    assert_eq!(obs.instrument_aperture, "20.0");
    assert_eq!(obs.instrument_type, "L");
    assert_eq!(obs.focal_ratio, "5");
    assert_eq!(obs.magnification, "63");
    assert_eq!(obs.coma_diameter_estimate_flag, "d");
    assert_eq!(obs.coma_diameter, "12.0");
    assert_eq!(obs.central_condensation, "/");
    assert_eq!(obs.degree_of_condensation, "5");
    assert_eq!(obs.tail_length, "0.25");
    assert_eq!(obs.position_angle_of_tail, "270");
    assert_eq!(obs.icq_publication, "ICQ 84");
    assert_eq!(obs.special_notes_two, "&");
    assert_eq!(obs.observer_code, "AAA01");
    assert_eq!(obs.source_line, line);
}

#[test]
fn test_decode_line_leaves_derived_fields_unset() {
    let line = " ".repeat(80);
    let obs = decode_line(&line, 1).unwrap();
    assert!(obs.observation_datetime.is_none());
    assert!(obs.days_to_perihelion.is_none());
    assert!(obs.heliocentric_corrected_magnitude.is_none());
}

#[test]
fn test_decode_line_performs_no_content_validation() {
    // Garbage field content decodes fine; typed accessors fail later.
    let line = build_line(&[(11..15, "XXXX"), (28..32, "dark")]);
    let obs = decode_line(&line, 3).unwrap();
    assert_eq!(obs.year_obs, "XXXX");
    assert_eq!(obs.magnitude, "dark");
    assert!(obs.year().is_err());
    assert!(obs.magnitude_value().is_err());
}

#[test]
fn test_decode_line_rejects_short_record() {
    let err = decode_line("too short", 7).unwrap_err();
    match err {
        Error::MalformedRecord { line_number, .. } => assert_eq!(line_number, 7),
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn test_decode_line_accepts_overlong_record() {
    let mut line = " ".repeat(80);
    line.push_str(" trailing commentary");
    assert!(decode_line(&line, 1).is_ok());
}

#[test]
fn test_columns_cover_24_fields_in_order() {
    assert_eq!(COLUMNS.len(), COLUMN_COUNT);
    assert_eq!(COLUMNS[0].0, "apparition_label");
    assert_eq!(COLUMNS[23].0, "observer_code");
    assert_eq!(COLUMNS[23].1, 75..80);
    // Ranges never run backwards and stay inside the 80-byte record
    for (_, range) in &COLUMNS {
        assert!(range.start < range.end);
        assert!(range.end <= 80);
    }
}

#[test]
fn test_decode_catalog_aborts_on_first_bad_line() {
    let good = " ".repeat(80);
    let lines = vec![good.clone(), "truncated".to_string(), good];
    let err = decode_catalog(lines).unwrap_err();
    match err {
        Error::MalformedRecord { line_number, .. } => assert_eq!(line_number, 2),
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn test_decode_catalog_empty_input() {
    let observations = decode_catalog(Vec::<String>::new()).unwrap();
    assert!(observations.is_empty());
}
