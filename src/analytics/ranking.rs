//! Cross-airport ranking by combined delay rate.

use crate::analytics::aggregate::aggregate;
use crate::model::DelayRecord;

/// One entry of the ranked list.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RankedAirport {
    /// 3-letter airport code.
    pub code: String,

    /// Airport display name, taken from the code's first record.
    pub name: String,

    /// Combined delay rate over the code's full history, in percent.
    pub rate: f64,
}

/// Ranks every airport by combined delay rate and returns the worst `n`.
///
/// The rate is `percentage(delayed + canceled, total_flights)` over all
/// records for the code, no month/year filter. A total sort over all
/// airports each call; the input order (the index's traversal order) does
/// not matter. Sorted by rate descending, code ascending on equal rates so
/// the output is deterministic regardless of backend.
///
/// # Arguments
///
/// * `airports` - Every (code, record sequence) pair, as emitted by an
///   index traversal.
/// * `n` - Maximum number of entries to return.
pub fn top_n(airports: &[(String, &[DelayRecord])], n: usize) -> Vec<RankedAirport> {
    let mut ranked: Vec<RankedAirport> = airports
        .iter()
        .filter(|(_, records)| !records.is_empty())
        .map(|(code, records)| RankedAirport {
            code: code.clone(),
            name: records[0].name.clone(),
            rate: aggregate(records, None, None).delay_rate(),
        })
        .collect();

    ranked.sort_by(|a, b| b.rate.total_cmp(&a.rate).then_with(|| a.code.cmp(&b.code)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::test_utils::record;

    fn airports() -> Vec<(String, Vec<DelayRecord>)> {
        vec![
            // 12% over full history
            (
                "ATL".to_string(),
                vec![
                    record("ATL", "January", "2015", 10, 2, 100),
                    record("ATL", "January", "2016", 5, 1, 50),
                ],
            ),
            // 30%
            ("BOS".to_string(), vec![record("BOS", "January", "2015", 25, 5, 100)]),
            // 5%
            ("BWI".to_string(), vec![record("BWI", "January", "2015", 5, 0, 100)]),
        ]
    }

    fn borrowed(owned: &[(String, Vec<DelayRecord>)]) -> Vec<(String, &[DelayRecord])> {
        owned
            .iter()
            .map(|(code, records)| (code.clone(), records.as_slice()))
            .collect()
    }

    #[test]
    fn sorts_by_rate_descending() {
        let owned = airports();
        let ranked = top_n(&borrowed(&owned), 5);
        let codes: Vec<&str> = ranked.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, ["BOS", "ATL", "BWI"]);
        assert!(ranked.windows(2).all(|w| w[0].rate >= w[1].rate));
        assert_eq!(ranked[0].rate, 30.0);
        assert_eq!(ranked[1].rate, 12.0);
    }

    #[test]
    fn truncates_to_n() {
        let owned = airports();
        assert_eq!(top_n(&borrowed(&owned), 2).len(), 2);
        assert_eq!(top_n(&borrowed(&owned), 0).len(), 0);
    }

    #[test]
    fn fewer_airports_than_n_returns_all() {
        let owned = airports();
        assert_eq!(top_n(&borrowed(&owned), 10).len(), 3);
    }

    #[test]
    fn equal_rates_order_by_code() {
        let owned = vec![
            ("DEN".to_string(), vec![record("DEN", "January", "2015", 10, 0, 100)]),
            ("ABQ".to_string(), vec![record("ABQ", "January", "2015", 10, 0, 100)]),
        ];
        let ranked = top_n(&borrowed(&owned), 5);
        let codes: Vec<&str> = ranked.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, ["ABQ", "DEN"]);
    }

    #[test]
    fn reruns_are_identical() {
        let owned = airports();
        let first = top_n(&borrowed(&owned), 5);
        let second = top_n(&borrowed(&owned), 5);
        assert_eq!(first, second);
    }
}
