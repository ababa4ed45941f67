//! Catalog file loading
//!
//! Reads a whole observation file into memory and decodes it. Catalogs
//! are sized to a single apparition (hundreds to low thousands of
//! rows), so no streaming is needed.

use super::decode_catalog;
use crate::app::models::Observation;
use crate::{Error, Result};
use std::path::Path;
use tracing::info;

/// Read and decode an ICQ catalog file
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read and
/// `Error::MalformedRecord` if any line fails to decode; decoding
/// errors abort the whole load.
pub fn read_catalog(path: &Path) -> Result<Vec<Observation>> {
    info!("Reading ICQ catalog from {}", path.display());

    let contents = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("failed to read catalog '{}'", path.display()), e))?;

    decode_catalog(contents.lines())
}
