// Copyright (c) 2026 Makani Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hilo Hash index implementation.
//!
//! The direct alternative to the trie: a hash map keyed on the whole
//! airport code. FNV hashing suits the tiny, trusted 3-byte keys. Identical
//! input must yield identical query results from either backend; the
//! equivalence is covered by property tests.

use fnv::FnvHashMap;

use crate::data_structures::{AirportIndex, IndexError, IndexResult};
use crate::model::DelayRecord;

/// Hash map index from airport code to that code's record rows.
#[derive(Debug, Default)]
pub struct HiloHash {
    map: FnvHashMap<String, Vec<DelayRecord>>,
}

impl HiloHash {
    /// Creates a new empty `HiloHash`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct codes in the index.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns whether the index holds no codes.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl AirportIndex for HiloHash {
    fn insert(&mut self, code: &str, record: DelayRecord) -> IndexResult<()> {
        if code.is_empty() {
            return Err(IndexError::EmptyCode);
        }
        self.map.entry(code.to_string()).or_default().push(record);
        Ok(())
    }

    fn lookup(&self, code: &str) -> IndexResult<&[DelayRecord]> {
        if code.is_empty() {
            return Err(IndexError::EmptyCode);
        }
        self.map
            .get(code)
            .map(Vec::as_slice)
            .ok_or_else(|| IndexError::NotFound(code.to_string()))
    }

    fn traverse_all(&self) -> Vec<(String, &[DelayRecord])> {
        self.map
            .iter()
            .map(|(code, records)| (code.clone(), records.as_slice()))
            .collect()
    }
}
