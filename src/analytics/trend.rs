//! By-year delay-rate trend.

use crate::analytics::aggregate::aggregate;
use crate::model::DelayRecord;

/// Average delay rate for one year: the sum of the standalone monthly
/// delay rates of every distinct month present in that year, divided by a
/// fixed 12.
///
/// Assumes one record per month per year. A year with fewer than 12 months
/// present is underestimated; that is documented behavior, not corrected
/// here, and the report flags the earliest (partial) year.
pub fn yearly_rate(records: &[DelayRecord], year: &str) -> f64 {
    let mut months: Vec<&str> = records
        .iter()
        .filter(|record| record.year == year)
        .map(|record| record.month.as_str())
        .collect();
    months.sort_unstable();
    months.dedup();

    let total: f64 = months
        .iter()
        .map(|month| aggregate(records, Some(month), Some(year)).delay_rate())
        .sum();
    total / 12.0
}

/// Every distinct year paired with its [`yearly_rate`], ascending by year.
///
/// Returned as an owned series; per-query state never accumulates outside
/// this function.
pub fn yearly_trend(records: &[DelayRecord]) -> Vec<(String, f64)> {
    let mut years: Vec<String> = records.iter().map(|record| record.year.clone()).collect();
    years.sort_unstable();
    years.dedup();

    years
        .into_iter()
        .map(|year| {
            let rate = yearly_rate(records, &year);
            (year, rate)
        })
        .collect()
}
