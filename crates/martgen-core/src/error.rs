//! # Error Types
//!
//! Defines `MartGenError`, the unified error enum for every failure mode in
//! the martgen pipeline. Every variant carries enough context (table name,
//! requested count, file path) to debug immediately without digging through
//! logs.

use thiserror::Error;

/// All errors that can occur in martgen operations.
#[derive(Error, Debug)]
pub enum MartGenError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Cannot generate {requested} rows for {table}: defect injection draws {minimum} distinct rows\n  Raise the row count to at least {minimum}")]
    RowCount {
        table: &'static str,
        requested: usize,
        minimum: usize,
    },

    #[error("Invalid date range: start {start} is after end {end}")]
    DateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("Output error: {message}: {source}")]
    Output {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MartGenError>;
