//! Error types shared by the index backends.
//!
//! Both backends fail the same way so that callers depending on the
//! [`super::AirportIndex`] contract never observe which structure answered.

use thiserror::Error;

/// Result type for index operations.
pub type IndexResult<T> = Result<T, IndexError>;

/// Errors that can occur in index operations.
#[derive(Error, Debug)]
pub enum IndexError {
    /// Error when an empty airport code is inserted or looked up.
    #[error("Empty airport code not allowed")]
    EmptyCode,

    /// Lookup on a code that was never inserted. Recoverable: surfaced to
    /// the caller as "no data for this code".
    #[error("No data for airport code: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            IndexError::EmptyCode.to_string(),
            "Empty airport code not allowed"
        );
        assert_eq!(
            IndexError::NotFound("ZZZ".to_string()).to_string(),
            "No data for airport code: ZZZ"
        );
    }
}
