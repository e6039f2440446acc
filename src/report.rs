//! Fixed-format report sections.
//!
//! Every section is rendered to a `String` so the formatting is testable
//! without capturing stdout; the binary just prints the result.

use std::fmt::Write as _;

use crate::analytics::{aggregate, percentage, RankedAirport};
use crate::error::MakaniResult;
use crate::model::DelayRecord;

/// Per-query delay breakdown for one airport and month.
///
/// One line per matching record (year, canceled, delayed, total flights),
/// followed by the percentage-of-total lines and the five-cause delay
/// breakdown, all computed over the same month filter.
pub fn breakdown(code: &str, name: &str, records: &[DelayRecord], month: &str) -> String {
    let totals = aggregate(records, Some(month), None);
    let mut out = String::new();

    let _ = writeln!(out, "Delay breakdown for {code} ({name}), {month}");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {:<6} {:>10} {:>10} {:>12}",
        "year", "canceled", "delayed", "flights"
    );
    for record in records.iter().filter(|record| record.month == month) {
        let _ = writeln!(
            out,
            "  {:<6} {:>10} {:>10} {:>12}",
            record.year, record.canceled, record.delayed, record.total_flights
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  delayed:  {} of {} flights ({:.1}%)",
        totals.delayed,
        totals.total_flights,
        totals.delayed_pct()
    );
    let _ = writeln!(
        out,
        "  canceled: {} of {} flights ({:.1}%)",
        totals.canceled,
        totals.total_flights,
        totals.canceled_pct()
    );
    let _ = writeln!(out, "  combined delay rate: {:.1}%", totals.delay_rate());
    let _ = writeln!(out);
    let _ = writeln!(out, "  Delay causes:");
    for (label, count) in totals.causes() {
        let _ = writeln!(
            out,
            "    {:<16} {:>10} ({:.1}%)",
            label,
            count,
            percentage(count, totals.cause_total())
        );
    }
    out
}

/// Ranked list of the worst airports by combined delay rate.
pub fn top_table(ranked: &[RankedAirport]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Worst airports by delay rate");
    let _ = writeln!(out);
    for (position, airport) in ranked.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {:<4} {:<40} {:>6.1}%",
            position + 1,
            airport.code,
            airport.name,
            airport.rate
        );
    }
    out
}

/// The ranked list as pretty-printed JSON.
pub fn rankings_json(ranked: &[RankedAirport]) -> MakaniResult<String> {
    Ok(serde_json::to_string_pretty(ranked)?)
}

/// By-year average delay rate table for one airport.
///
/// The earliest year in the dataset is typically partial, and the yearly
/// average always divides by 12 months, so its figure is flagged as an
/// underestimate.
pub fn trend_table(code: &str, trend: &[(String, f64)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Average delay rate by year for {code}");
    let _ = writeln!(out);
    for (index, (year, rate)) in trend.iter().enumerate() {
        let marker = if index == 0 { " *" } else { "" };
        let _ = writeln!(out, "  {year} {rate:>6.2}%{marker}");
    }
    if let Some((year, _)) = trend.first() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "  * {year} is a partial year; its average assumes 12 months of data \
             and underestimates the true rate"
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::test_utils::{atl_fixture, record};

    #[test]
    fn breakdown_lists_matching_rows_and_percentages() {
        let records = atl_fixture();
        let out = breakdown("ATL", "Hartsfield-Jackson", &records, "January");

        assert!(out.contains("Delay breakdown for ATL (Hartsfield-Jackson), January"));
        assert!(out.contains("2015"));
        assert!(out.contains("2016"));
        assert!(out.contains("delayed:  15 of 150 flights (10.0%)"));
        assert!(out.contains("canceled: 3 of 150 flights (2.0%)"));
        assert!(out.contains("combined delay rate: 12.0%"));
        assert!(out.contains("weather"));
        // February rows are filtered out.
        assert!(!out.contains("200"));
    }

    #[test]
    fn top_table_numbers_entries() {
        let ranked = vec![
            RankedAirport {
                code: "BOS".to_string(),
                name: "Logan International".to_string(),
                rate: 30.0,
            },
            RankedAirport {
                code: "ATL".to_string(),
                name: "Hartsfield-Jackson".to_string(),
                rate: 12.0,
            },
        ];
        let out = top_table(&ranked);
        assert!(out.contains("1. BOS"));
        assert!(out.contains("2. ATL"));
        assert!(out.contains("30.0%"));
    }

    #[test]
    fn rankings_json_round_trips_fields() {
        let ranked = vec![RankedAirport {
            code: "ATL".to_string(),
            name: "Hartsfield-Jackson".to_string(),
            rate: 12.0,
        }];
        let json = rankings_json(&ranked).unwrap();
        assert!(json.contains("\"code\": \"ATL\""));
        assert!(json.contains("\"rate\": 12.0"));
    }

    #[test]
    fn trend_table_flags_earliest_year() {
        let records = vec![
            record("ATL", "January", "2015", 10, 2, 100),
            record("ATL", "January", "2016", 5, 1, 50),
        ];
        let trend = crate::analytics::yearly_trend(&records);
        let out = trend_table("ATL", &trend);
        assert!(out.contains("2015"));
        assert!(out.contains("2015 is a partial year"));
        assert!(!out.contains("2016 is a partial year"));
    }

    #[test]
    fn trend_table_for_no_years_has_no_caveat() {
        let out = trend_table("ATL", &[]);
        assert!(!out.contains("partial year"));
    }
}
