//! Query error module.
//!
//! These errors are recoverable: the CLI surfaces them as a rejection and
//! prompts again rather than aborting the session.

use thiserror::Error;

/// Errors from user-supplied query parameters.
#[derive(Error, Debug)]
pub enum QueryError {
    /// Error when an entered month fails normalization against the
    /// 12-entry English month table.
    #[error("'{0}' is not an English month name")]
    InvalidMonth(String),

    /// Error when an entered index choice names neither backend.
    #[error("'{0}' is not an index backend (expected 'trie' or 'hash')")]
    UnknownBackend(String),
}
