//! Shared fixtures for the pipeline test suite


use crate::app::models::Observation;

/// Build a clean observation that passes every quality filter
pub fn create_observation(observer: &str, year: i32, month: u32, day: f64) -> Observation {
    Observation {
        apparition_label: String::new(),
        designation: "1995O1".to_string(),
        nucleus_split_flag: String::new(),
        year_obs: year.to_string(),
        month_obs: month.to_string(),
        day_obs: format!("{day:.2}"),
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
        observer_code: observer.to_string(),
        source_line: String::new(),
        observation_datetime: None,
        days_to_perihelion: None,
        heliocentric_corrected_magnitude: None,
    }
}

/// Observation with no reported magnitude
pub fn create_no_magnitude(observer: &str) -> Observation {
    let mut obs = create_observation(observer, 1997, 3, 12.50);
    obs.magnitude = String::new();
    obs
}

/// Observation flagged as a reverse-binocular estimate
pub fn create_reverse_binocular(observer: &str) -> Observation {
    let mut obs = create_observation(observer, 1997, 3, 12.50);
    obs.special_notes = "r".to_string();
    obs
}

/// Observation made under poor conditions
pub fn create_poor_weather(observer: &str) -> Observation {
    let mut obs = create_observation(observer, 1997, 3, 12.50);
    obs.poor_conditions_flag = ":".to_string();
    obs
}
