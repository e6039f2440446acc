//! Makani Flight Delay Analytics Library
//!
//! This library contains the core components of Makani: the record model,
//! the dataset ingestion adapter, the two interchangeable index backends
//! (character trie and hash map), and the aggregation, ranking, and trend
//! analytics layered on top. The library is designed to be used by the
//! binary crate, but can also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! Makani is designed with the following principles in mind:
//! - One index contract, two structures: callers never depend on which
//!   backend answered
//! - Ingestion is all-or-nothing; indexes are immutable once built
//! - Pure, stateless analytics recomputed per query
//! - Comprehensive error handling and propagation

// Re-export public modules
pub mod analytics;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod ingest;
pub mod model;
pub mod report;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Makani.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::MakaniResult<()> {
    // Set up global error reporter with tracing
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}
