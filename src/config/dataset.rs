//! Dataset configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// Where the delay dataset lives and how its fields are separated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the delimited delay dataset.
    pub path: PathBuf,

    /// Field separator character.
    pub delimiter: char,
}

impl DatasetConfig {
    /// The separator as the single byte the csv reader expects.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/airlines.csv"),
            delimiter: ',',
        }
    }
}

impl Validate for DatasetConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dataset.path must not be empty".to_string(),
            ));
        }

        if !self.delimiter.is_ascii() {
            return Err(ConfigError::ValidationError(format!(
                "dataset.delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }

        if self.delimiter == '"' {
            return Err(ConfigError::ValidationError(
                "dataset.delimiter must not be the quote character".to_string(),
            ));
        }

        Ok(())
    }
}
