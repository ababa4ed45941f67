//! Clean command implementation
//!
//! Runs the complete workflow: decode the catalog, run the cleaning
//! pipeline, apply the heliocentric correction, and write the cleaned
//! catalog and removal audit.

use super::shared::{print_run_summary, setup_logging};
use crate::app::services::decoder::read_catalog;
use crate::app::services::pipeline::CatalogCleaner;
use crate::cli::args::CleanArgs;
use crate::config::PipelineConfig;
use crate::{Error, Result};
use std::fs;
use std::time::Instant;
use tracing::{debug, info};

/// Clean command runner
///
/// 1. Set up logging and validate arguments
/// 2. Decode the input catalog
/// 3. Run the cleaning pipeline and the magnitude correction
/// 4. Write the surviving records and the removal audit
pub fn run_clean(args: CleanArgs) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting ICQ processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let mut config = PipelineConfig::new(&args.perihelion)?;
    if args.no_sort {
        config = config.without_general_sorting();
    }
    if args.no_helio {
        config = config.without_heliocentric_correction();
    }

    let rows = read_catalog(&args.input)?;

    let cleaner = CatalogCleaner::new(config);
    let mut result = cleaner.run(rows)?;
    result.observations = cleaner.shift_magnitudes(result.observations);

    write_survivors(&args, &result.observations)?;

    if let Some(audit_path) = &args.audit {
        let audit = result.audit()?;
        let json = serde_json::to_string_pretty(audit).map_err(|e| {
            Error::configuration(format!("Failed to serialize removal audit: {}", e))
        })?;
        fs::write(audit_path, json)
            .map_err(|e| Error::io(format!("Failed to write audit file '{}'", audit_path.display()), e))?;
        info!("Removal audit written to {}", audit_path.display());
    }

    if !args.quiet {
        print_run_summary(&result);
    }

    info!("Finished in {:.2?}", start_time.elapsed());
    Ok(())
}

/// Write surviving records as their original 80-column source lines
fn write_survivors(args: &CleanArgs, rows: &[crate::Observation]) -> Result<()> {
    let mut contents = rows
        .iter()
        .map(|row| row.source_line.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    if !contents.is_empty() {
        contents.push('\n');
    }

    match &args.output {
        Some(path) => {
            fs::write(path, contents).map_err(|e| {
                Error::io(format!("Failed to write output file '{}'", path.display()), e)
            })?;
            info!("Cleaned catalog written to {}", path.display());
        }
        None => {
            print!("{}", contents);
        }
    }
    Ok(())
}
