//! Record model for the Makani flight delay analytics.
//!
//! One [`DelayRecord`] is one airport/month/year delay-statistics
//! observation. Records are created once during ingestion and never
//! mutated afterwards.

pub mod month;

pub use month::{normalize_month, MONTHS};

/// One airport/month/year delay-statistics observation.
///
/// `delayed + canceled <= total_flights` is expected of well-formed data
/// but not enforced; the analytics layer tolerates garbage counts.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DelayRecord {
    /// 3-letter airport code, uppercase canonical form.
    pub code: String,

    /// Airport display name, already stripped of its city prefix.
    pub name: String,

    /// Full English month name, Title Case.
    pub month: String,

    /// 4-digit year, kept as a string key.
    pub year: String,

    /// Delays attributed to the air carrier.
    pub carrier: u64,

    /// Delays attributed to a late inbound aircraft.
    pub late: u64,

    /// Delays attributed to the national aviation system.
    pub navis: u64,

    /// Delays attributed to security.
    pub security: u64,

    /// Delays attributed to weather.
    pub weather: u64,

    /// Canceled flights.
    pub canceled: u64,

    /// Delayed flights.
    pub delayed: u64,

    /// Total flights flown.
    pub total_flights: u64,
}

/// Extracts the airport display name from a `"City, ST: Name"` style field.
///
/// Returns the substring after the first `": "` separator, or the whole
/// field when the separator is absent.
pub fn extract_name(raw: &str) -> &str {
    raw.split_once(": ").map_or(raw, |(_, name)| name)
}
