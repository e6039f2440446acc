//! Query configuration.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigResult, Validate};
use crate::data_structures::IndexKind;
use crate::error::config::ConfigError;

/// Defaults for the query surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// How many airports the ranked list shows.
    pub top_n: usize,

    /// Index backend used when the caller does not choose one.
    pub index: IndexKind,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            index: IndexKind::Trie,
        }
    }
}

impl Validate for QueryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.top_n == 0 {
            return Err(ConfigError::ValidationError(
                "query.top_n must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
