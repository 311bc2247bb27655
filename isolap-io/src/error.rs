use std::io;
use thiserror::Error;

use isolap_core::errors::IntervalError;

/// Error type for isolap-io operations.
///
/// Every row-level variant carries the 1-based line number in the source file. A
/// bad row fails the whole batch; nothing is skipped.
#[derive(Error, Debug)]
pub enum IoError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The CSV layer could not read a record.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row has fewer than two columns.
    #[error("Line {line}: missing {column} column")]
    MissingColumn { line: u64, column: &'static str },

    /// A column is not an integer.
    #[error("Line {line}: can't parse {column} value '{value}' as an integer")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },

    /// The row parsed but describes an inverted interval.
    #[error("Line {line}: {source}")]
    InvalidInterval {
        line: u64,
        #[source]
        source: IntervalError,
    },

    /// Generator settings that can't produce intervals.
    #[error("Invalid generator settings: {0}")]
    InvalidGenerator(String),
}

/// Result type alias for isolap-io operations.
pub type Result<T> = std::result::Result<T, IoError>;
