//! Test utilities and fixtures for Makani.
//!
//! This module provides reusable fixtures for the per-module unit tests,
//! so every test builds records the same way.

use tempfile::TempDir;

use crate::model::DelayRecord;

/// Create a temporary directory for test files.
///
/// # Returns
///
/// A result containing the temporary directory or an error if creation fails.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Builds one record with the counters most tests care about.
///
/// The carrier cause mirrors the delayed count; the remaining causes are
/// zero unless a test constructs the record by hand.
pub fn record(
    code: &str,
    month: &str,
    year: &str,
    delayed: u64,
    canceled: u64,
    total_flights: u64,
) -> DelayRecord {
    DelayRecord {
        code: code.to_string(),
        name: format!("{code} International"),
        month: month.to_string(),
        year: year.to_string(),
        carrier: delayed,
        late: 0,
        navis: 0,
        security: 0,
        weather: 0,
        canceled,
        delayed,
        total_flights,
    }
}

/// The three-record ATL fixture used by the aggregation tests:
/// two January rows across years plus one February row.
pub fn atl_fixture() -> Vec<DelayRecord> {
    vec![
        record("ATL", "January", "2015", 10, 2, 100),
        record("ATL", "January", "2016", 5, 1, 50),
        record("ATL", "February", "2015", 20, 0, 200),
    ]
}
