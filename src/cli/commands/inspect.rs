//! Inspect command implementation
//!
//! Decodes a catalog file and prints the leading records without
//! running any of the cleaning stages. Useful for checking that a file
//! really is in the 80-column ICQ format before processing it.

use super::shared::setup_logging;
use crate::app::services::decoder::read_catalog;
use crate::cli::args::InspectArgs;
use crate::Result;
use colored::Colorize;
use tracing::info;

/// Inspect command runner
pub fn run_inspect(args: InspectArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false)?;

    args.validate()?;

    let rows = read_catalog(&args.input)?;
    info!("Decoded {} records from {}", rows.len(), args.input.display());

    println!(
        "{}",
        format!(
            "{:<10} {:<6} {:<4} {:<6} {:<6} {:<4} {:<8} {:<6}",
            "designation", "year", "mon", "day", "mag", "meth", "aperture", "observer"
        )
        .bold()
    );

    for row in rows.iter().take(args.limit) {
        println!(
            "{:<10} {:<6} {:<4} {:<6} {:<6} {:<4} {:<8} {:<6}",
            row.designation,
            row.year_obs,
            row.month_obs,
            row.day_obs,
            row.magnitude,
            row.mag_method,
            row.instrument_aperture,
            row.observer_code
        );
    }

    if rows.len() > args.limit {
        println!(
            "{}",
            format!("... and {} more records", rows.len() - args.limit).dimmed()
        );
    }

    Ok(())
}
