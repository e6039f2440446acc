//! Month-name normalization.
//!
//! User-entered month names are matched case-insensitively against a fixed
//! table of the 12 English month names and normalized to their Title Case
//! form. Anything that is not one of the 12 names is rejected.

use crate::error::query::QueryError;

/// The 12 English month names in calendar order, Title Case.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Normalizes a user-entered month name to its canonical Title Case form.
///
/// # Arguments
///
/// * `input` - The raw month name, any casing, surrounding whitespace allowed.
///
/// # Returns
///
/// * `Ok(&'static str)` - The canonical month name from [`MONTHS`].
/// * `Err(QueryError::InvalidMonth)` - If the input is not an English month name.
pub fn normalize_month(input: &str) -> Result<&'static str, QueryError> {
    let trimmed = input.trim();
    MONTHS
        .iter()
        .find(|month| month.eq_ignore_ascii_case(trimmed))
        .copied()
        .ok_or_else(|| QueryError::InvalidMonth(input.to_string()))
}
