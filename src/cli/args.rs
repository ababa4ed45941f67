//! Command-line argument definitions for the ICQ processor
//!
//! Defines the complete CLI interface using the clap derive API.

use crate::constants::PERIHELION_DATE_FORMAT;
use crate::{Error, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the ICQ catalog processor
///
/// Cleans comet brightness observation catalogs recorded in the
/// International Comet Quarterly 80-column format.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "icq-processor",
    version,
    about = "Clean comet brightness catalogs in the ICQ 80-column observation format",
    long_about = "Decodes fixed-width ICQ observation records, removes unreliable \
                  observations through a deterministic chain of quality-control filters, \
                  collapses same-observer/same-day duplicates, and applies a heliocentric \
                  magnitude correction, producing a cleaned catalog plus a removal audit."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the ICQ processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the full cleaning pipeline over a catalog file (main command)
    Clean(CleanArgs),
    /// Decode a catalog file and print records without cleaning
    Inspect(InspectArgs),
}

/// Arguments for the clean command (main catalog processing)
#[derive(Debug, Clone, Parser)]
pub struct CleanArgs {
    /// Input ICQ catalog file
    ///
    /// A plain-text file of 80-column ICQ observation records, one per line.
    #[arg(value_name = "CATALOG", help = "Input ICQ catalog file")]
    pub input: PathBuf,

    /// Perihelion date of the apparition
    ///
    /// Anchors every day-offset calculation in duplicate-date resolution.
    #[arg(
        short = 'p',
        long = "perihelion",
        value_name = "DATE",
        help = "Perihelion date of the apparition (YYYY-MM-DD)"
    )]
    pub perihelion: String,

    /// Output file for the surviving observations
    ///
    /// Survivors are written as their original 80-column source lines,
    /// in observer-then-date order. If not specified, writes to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for surviving observations"
    )]
    pub output: Option<PathBuf>,

    /// Output file for the removal audit in JSON form
    ///
    /// Records every removed observation grouped under its reason key.
    #[arg(
        long = "audit",
        value_name = "FILE",
        help = "Write the removal audit as JSON to this file"
    )]
    pub audit: Option<PathBuf>,

    /// Skip the sorting and filtering pipeline
    ///
    /// Rows pass through untouched and no removal audit is produced.
    #[arg(long = "no-sort", help = "Skip sorting, filtering and deduplication")]
    pub no_sort: bool,

    /// Skip the heliocentric magnitude correction
    #[arg(long = "no-helio", help = "Skip the heliocentric magnitude correction")]
    pub no_helio: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the inspect command (decode and print)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Input ICQ catalog file
    #[arg(value_name = "CATALOG", help = "Input ICQ catalog file")]
    pub input: PathBuf,

    /// Maximum number of records to print
    #[arg(
        short = 'n',
        long = "limit",
        value_name = "COUNT",
        default_value_t = 10,
        help = "Maximum number of records to print"
    )]
    pub limit: usize,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Option<Commands> {
        self.command.clone()
    }
}

impl CleanArgs {
    /// Validate the clean command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input catalog does not exist: {}",
                self.input.display()
            )));
        }

        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input catalog is not a file: {}",
                self.input.display()
            )));
        }

        // Fail on a bad perihelion date before any decoding work happens
        NaiveDate::parse_from_str(&self.perihelion, PERIHELION_DATE_FORMAT).map_err(|e| {
            Error::configuration(format!(
                "Invalid perihelion date '{}' (expected YYYY-MM-DD): {}",
                self.perihelion, e
            ))
        })?;

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl InspectArgs {
    /// Validate the inspect command arguments
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input catalog does not exist: {}",
                self.input.display()
            )));
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_args_parse() {
        let args = Args::parse_from([
            "icq-processor",
            "clean",
            "catalog.txt",
            "--perihelion",
            "1997-04-01",
            "-o",
            "cleaned.txt",
            "-vv",
        ]);

        match args.command {
            Some(Commands::Clean(clean)) => {
                assert_eq!(clean.input, PathBuf::from("catalog.txt"));
                assert_eq!(clean.perihelion, "1997-04-01");
                assert_eq!(clean.output, Some(PathBuf::from("cleaned.txt")));
                assert!(!clean.no_sort);
                assert!(!clean.no_helio);
                assert_eq!(clean.get_log_level(), "debug");
            }
            other => panic!("expected clean command, got {:?}", other),
        }
    }

    #[test]
    fn test_clean_args_toggles() {
        let args = Args::parse_from([
            "icq-processor",
            "clean",
            "catalog.txt",
            "-p",
            "1997-04-01",
            "--no-sort",
            "--no-helio",
            "-q",
        ]);

        match args.command {
            Some(Commands::Clean(clean)) => {
                assert!(clean.no_sort);
                assert!(clean.no_helio);
                assert_eq!(clean.get_log_level(), "error");
            }
            other => panic!("expected clean command, got {:?}", other),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from([
            "icq-processor",
            "clean",
            "catalog.txt",
            "-p",
            "1997-04-01",
            "-q",
            "-v",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_inspect_args_defaults() {
        let args = Args::parse_from(["icq-processor", "inspect", "catalog.txt"]);
        match args.command {
            Some(Commands::Inspect(inspect)) => {
                assert_eq!(inspect.limit, 10);
                assert_eq!(inspect.get_log_level(), "warn");
            }
            other => panic!("expected inspect command, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_bad_perihelion_date() {
        let catalog = tempfile::NamedTempFile::new().unwrap();
        let clean = CleanArgs {
            input: catalog.path().to_path_buf(),
            perihelion: "April 1997".to_string(),
            output: None,
            audit: None,
            no_sort: false,
            no_helio: false,
            verbose: 0,
            quiet: false,
        };
        assert!(clean.validate().is_err());
    }
}
