//! Ingestion error module.
//!
//! A malformed row is fatal to the whole load: silently skipping it would
//! corrupt aggregate totals without any signal to the caller.

use thiserror::Error;

/// Errors that can occur while loading the delay dataset.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Error when a row cannot be coerced into a record.
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow {
        /// 1-based line number in the source file, header included.
        line: usize,
        /// What failed to coerce.
        reason: String,
    },

    /// Error when a row has fewer columns than the fixed schema requires.
    #[error("row at line {line} has {found} columns, expected at least {expected}")]
    MissingColumns {
        /// 1-based line number in the source file, header included.
        line: usize,
        /// Columns present in the row.
        found: usize,
        /// Columns the schema requires.
        expected: usize,
    },

    /// Error reading or splitting the underlying delimited file.
    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    /// Error opening the dataset file.
    #[error("failed to open dataset: {0}")]
    Io(#[from] std::io::Error),
}
