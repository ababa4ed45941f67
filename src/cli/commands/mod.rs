//! Command implementations for the ICQ processor CLI
//!
//! Each command lives in its own module; `shared` holds the logging
//! setup and reporting helpers used by all of them.

pub mod clean;
pub mod inspect;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the ICQ processor
///
/// Dispatches to the appropriate subcommand handler:
/// - `clean`: the full decode, filter, deduplicate, correct workflow
/// - `inspect`: decode-only preview of a catalog file
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Some(Commands::Clean(clean_args)) => clean::run_clean(clean_args),
        Some(Commands::Inspect(inspect_args)) => inspect::run_inspect(inspect_args),
        None => Ok(()),
    }
}
