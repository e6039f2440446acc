//! Analytics over an airport's record rows.
//!
//! All three consumers are pure, stateless functions over the index's
//! query contract: [`aggregate`] sums a filtered record sequence,
//! [`top_n`] ranks every airport by combined delay rate, and
//! [`yearly_trend`] averages monthly rates into a by-year series.

pub mod aggregate;
pub mod ranking;
pub mod trend;

pub use aggregate::{aggregate, percentage, Aggregate};
pub use ranking::{top_n, RankedAirport};
pub use trend::{yearly_rate, yearly_trend};
