//! Fixed-width decoder for ICQ 80-column observation records
//!
//! The decoder is a mechanical format reader: it slices each raw line
//! into the 24 canonical ICQ columns and trims the surrounding
//! whitespace. No field content is validated here; invalid numbers or
//! method codes are caught downstream by the pipeline stages that need
//! the typed values.
//!
//! Decoding is all-or-nothing: the first malformed line aborts the
//! load so a partial catalog can never flow into the pipeline.

pub mod fields;
pub mod reader;

#[cfg(test)]
mod tests;

pub use fields::decode_line;
pub use reader::read_catalog;

use crate::Result;
use crate::app::models::Observation;
use tracing::info;

/// Decode a full catalog of raw lines into observation records
///
/// Line numbers in errors are 1-based. The first failure aborts the
/// whole load; a single bad row is never skipped silently.
pub fn decode_catalog<I, S>(lines: I) -> Result<Vec<Observation>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut observations = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        observations.push(decode_line(line.as_ref(), index + 1)?);
    }

    info!("Decoded {} ICQ observation records", observations.len());
    Ok(observations)
}
