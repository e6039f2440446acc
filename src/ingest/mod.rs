//! Dataset ingestion.
//!
//! The delay dataset is a delimited text file: a header line followed by
//! one record per line, 17+ positional fields, fields optionally quoted
//! with `"` and embedded delimiters inside quotes preserved. Quote-aware
//! splitting is delegated to the csv reader; [`parse_row`] is the pure
//! adapter from an already-split row to a validated [`DelayRecord`].
//!
//! Ingestion is all-or-nothing: the first malformed row aborts the load.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::ingest::IngestError;
use crate::model::{extract_name, DelayRecord};

/// Minimum number of positional fields per row.
pub const MIN_COLUMNS: usize = 17;

const COL_CODE: usize = 0;
const COL_NAME: usize = 1;
const COL_MONTH: usize = 4;
const COL_YEAR: usize = 5;
const COL_CARRIER: usize = 6;
const COL_LATE: usize = 7;
const COL_NAVIS: usize = 8;
const COL_SECURITY: usize = 9;
const COL_WEATHER: usize = 10;
const COL_CANCELED: usize = 12;
const COL_DELAYED: usize = 13;
const COL_TOTAL: usize = 16;

/// Turns one already-split row into a validated record.
///
/// Pure transform: the caller guarantees quote-aware splitting, this
/// function guarantees the fixed positional schema. Any counter field that
/// fails integer coercion is a fatal ingestion error for the row, never a
/// silent zero.
///
/// # Arguments
///
/// * `columns` - The row's raw fields, in schema order.
/// * `line` - 1-based source line number, used in error reporting.
///
/// # Returns
///
/// * `Ok(DelayRecord)` - The validated record.
/// * `Err(IngestError)` - If the row is too short or a counter fails coercion.
pub fn parse_row(columns: &[&str], line: usize) -> Result<DelayRecord, IngestError> {
    if columns.len() < MIN_COLUMNS {
        return Err(IngestError::MissingColumns {
            line,
            found: columns.len(),
            expected: MIN_COLUMNS,
        });
    }

    let counter = |index: usize| -> Result<u64, IngestError> {
        let field = columns[index];
        field
            .trim()
            .parse::<u64>()
            .map_err(|_| IngestError::MalformedRow {
                line,
                reason: format!("column {index} is not a non-negative integer: {field:?}"),
            })
    };

    Ok(DelayRecord {
        code: columns[COL_CODE].trim().to_uppercase(),
        name: extract_name(columns[COL_NAME]).to_string(),
        month: columns[COL_MONTH].trim().to_string(),
        year: columns[COL_YEAR].trim().to_string(),
        carrier: counter(COL_CARRIER)?,
        late: counter(COL_LATE)?,
        navis: counter(COL_NAVIS)?,
        security: counter(COL_SECURITY)?,
        weather: counter(COL_WEATHER)?,
        canceled: counter(COL_CANCELED)?,
        delayed: counter(COL_DELAYED)?,
        total_flights: counter(COL_TOTAL)?,
    })
}

/// Loads every record from a delimited dataset file.
///
/// The first line is a discarded header. Rows pass through the csv
/// reader's quote-aware splitter and then [`parse_row`]; the first
/// malformed row aborts the whole load.
///
/// # Arguments
///
/// * `path` - The dataset file.
/// * `delimiter` - The field separator byte.
///
/// # Returns
///
/// * `Ok(Vec<DelayRecord>)` - Every record, in file order.
/// * `Err(IngestError)` - On the first unreadable or malformed row.
pub fn load_records(path: &Path, delimiter: u8) -> Result<Vec<DelayRecord>, IngestError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        // Line 1 is the header, so data starts at line 2.
        let line = index + 2;
        let fields: Vec<&str> = row.iter().collect();
        records.push(parse_row(&fields, line)?);
    }

    tracing::info!(
        records = records.len(),
        path = %path.display(),
        "dataset loaded"
    );
    Ok(records)
}
