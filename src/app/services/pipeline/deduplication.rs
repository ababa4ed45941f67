//! Duplicate-date resolution for ICQ observations
//!
//! This module sorts the row set by observer and date, derives the
//! absolute observation timestamp and the signed day offset from
//! perihelion for every row, and collapses same-observer/same-day
//! duplicates with an ordered tie-break policy.

use crate::app::models::Observation;
use crate::constants::SECONDS_PER_DAY;
use crate::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info};

/// Which side of a duplicate pair to discard
enum Discard {
    Predecessor,
    Current,
}

/// Sort observations ascending by `(observer, year, month, day)`
///
/// Year, month and fractional day are parsed from the raw fields; the
/// first unparseable value fails the sort with `Error::InvalidField`.
pub fn sort_by_observer_and_date(rows: Vec<Observation>) -> Result<Vec<Observation>> {
    let mut keyed: Vec<((String, i32, u32, f64), Observation)> = rows
        .into_iter()
        .map(|row| {
            let key = (row.observer_code.clone(), row.year()?, row.month()?, row.day()?);
            Ok((key, row))
        })
        .collect::<Result<_>>()?;

    keyed.sort_by(|(a, _), (b, _)| {
        a.0.cmp(&b.0)
            .then(a.1.cmp(&b.1))
            .then(a.2.cmp(&b.2))
            .then(a.3.total_cmp(&b.3))
    });

    Ok(keyed.into_iter().map(|(_, row)| row).collect())
}

/// Build the absolute observation timestamp from the raw date fields
///
/// The fractional day encodes UTC time-of-day; it is decomposed by
/// repeated flooring into whole day, hour, minute and second exactly
/// as reported, with the sub-second remainder carried as nanoseconds.
pub fn observation_datetime(row: &Observation) -> Result<NaiveDateTime> {
    let year = row.year()?;
    let month = row.month()?;
    let day = row.day()?;

    let whole_day = day.floor();
    let dec_hours = (day - whole_day) * 24.0;
    let hour = dec_hours.floor();
    let dec_minutes = (dec_hours - hour) * 60.0;
    let minute = dec_minutes.floor();
    let dec_seconds = (dec_minutes - minute) * 60.0;
    let second = dec_seconds.floor();
    let nanos = ((dec_seconds - second) * 1e9).round() as u32;

    NaiveDate::from_ymd_opt(year, month, whole_day as u32)
        .and_then(|date| {
            date.and_hms_nano_opt(hour as u32, minute as u32, second as u32, nanos.min(999_999_999))
        })
        .ok_or_else(|| {
            Error::invalid_field(
                "day_obs",
                &row.day_obs,
                format!("{}-{}-{} is not a valid observation date", year, month, day),
            )
        })
}

/// Signed whole-day offset of a timestamp from the perihelion midnight
///
/// Floors toward negative infinity, so an observation six hours before
/// perihelion day counts as day -1, not day 0.
pub fn days_to_perihelion(datetime: NaiveDateTime, perihelion: NaiveDate) -> i64 {
    let delta = datetime - perihelion.and_hms_opt(0, 0, 0).unwrap_or_default();
    delta.num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// Derive `observation_datetime` and `days_to_perihelion` for every row
pub fn enrich_with_perihelion_offsets(
    rows: &mut [Observation],
    perihelion: NaiveDate,
) -> Result<()> {
    for row in rows.iter_mut() {
        let datetime = observation_datetime(row)?;
        row.observation_datetime = Some(datetime);
        row.days_to_perihelion = Some(days_to_perihelion(datetime, perihelion));
    }
    Ok(())
}

/// Check whether two rows conflict: same observer, same perihelion-relative day
pub fn are_date_duplicates(a: &Observation, b: &Observation) -> bool {
    a.observer_code == b.observer_code
        && a.days_to_perihelion.is_some()
        && a.days_to_perihelion == b.days_to_perihelion
}

/// Collapse same-observer/same-day duplicates from a sorted row set
///
/// Rows must already be sorted by `(observer, year, month, day)`. The
/// scan runs backward from the last row, comparing each row to its
/// immediate predecessor; when a pair conflicts exactly one of the two
/// is removed and the scan continues against the new predecessor, so a
/// run of conflicting rows collapses pairwise without skipping any.
///
/// Tie-break policy, first match wins:
/// 1. The row with the strictly larger instrument aperture survives.
/// 2. A magnitude method of `S` survives over any other method.
/// 3. Then `M` survives.
/// 4. Then `B` or `I` survives.
/// 5. Otherwise the current (later-sorted) row is removed.
///
/// Returns `(surviving rows, removed rows in removal order)`.
///
/// # Errors
///
/// Unparseable date fields or instrument apertures fail with
/// `Error::InvalidField`.
pub fn resolve_duplicate_dates(
    mut rows: Vec<Observation>,
    perihelion: NaiveDate,
) -> Result<(Vec<Observation>, Vec<Observation>)> {
    info!("Removing points that are on the same date by the same observer.");

    enrich_with_perihelion_offsets(&mut rows, perihelion)?;

    let mut removed = Vec::new();
    let mut i = rows.len();
    while i >= 2 {
        let cur = i - 1;
        let pred = i - 2;

        if are_date_duplicates(&rows[cur], &rows[pred]) {
            let discard = tie_break(&rows[cur], &rows[pred])?;
            let index = match discard {
                Discard::Predecessor => pred,
                Discard::Current => cur,
            };
            debug!(
                "Duplicate day {} by observer {}: removing row dated {}",
                rows[cur].days_to_perihelion.unwrap_or_default(),
                rows[cur].observer_code,
                rows[index].day_obs
            );
            removed.push(rows.remove(index));
        }

        i -= 1;
    }

    info!(
        "Duplicate-date resolution complete: removed {} of {} rows",
        removed.len(),
        removed.len() + rows.len()
    );

    Ok((rows, removed))
}

/// Decide which side of a conflicting pair to discard
fn tie_break(current: &Observation, predecessor: &Observation) -> Result<Discard> {
    let current_aperture = current.aperture_value()?;
    let predecessor_aperture = predecessor.aperture_value()?;

    if current_aperture > predecessor_aperture {
        return Ok(Discard::Predecessor);
    }
    if predecessor_aperture > current_aperture {
        return Ok(Discard::Current);
    }

    for preferred in [&["S"][..], &["M"][..], &["B", "I"][..]] {
        if preferred.contains(&current.mag_method.as_str()) {
            return Ok(Discard::Predecessor);
        }
        if preferred.contains(&predecessor.mag_method.as_str()) {
            return Ok(Discard::Current);
        }
    }

    // No rule matched either side
    Ok(Discard::Current)
}
