//! ICQ Processor Library
//!
//! A Rust library for cleaning comet brightness observation catalogs
//! recorded in the International Comet Quarterly (ICQ) 80-column format.
//!
//! This library provides tools for:
//! - Decoding fixed-width ICQ records into typed observation rows
//! - Applying a deterministic chain of quality-control filters
//!   (missing magnitudes, reverse-binocular estimates, poor weather,
//!   bad extinction corrections, low-aperture instruments, unspecified
//!   magnitude methods, outdated reference catalogs)
//! - Collapsing same-observer/same-day duplicate observations with an
//!   ordered tie-break policy keyed to days from perihelion
//! - Applying a heliocentric magnitude correction to the cleaned set
//! - Producing a removal audit recording every discarded row and why

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod decoder;
        pub mod pipeline;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::Observation;
pub use app::models::audit::{RemovalAudit, RemovalReason};
pub use config::PipelineConfig;

/// Result type alias for the ICQ processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ICQ catalog processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A raw catalog line could not be sliced into the 24 ICQ columns
    #[error("Malformed record on line {line_number}: {reason}")]
    MalformedRecord { line_number: usize, reason: String },

    /// A field reached a stage requiring a typed value but did not parse
    #[error("Invalid '{field}' value '{value}': {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// Removal reasons were requested but the sorting pipeline never ran
    #[error("No removal audit available: general sorting was skipped")]
    MissingAudit,

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a malformed record error for a given input line
    pub fn malformed_record(line_number: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line_number,
            reason: reason.into(),
        }
    }

    /// Create an invalid field error
    pub fn invalid_field(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: "Date/time parsing failed".to_string(),
            source: error,
        }
    }
}
