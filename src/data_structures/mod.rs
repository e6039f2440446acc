//! Index structures for Makani.
//!
//! Two structurally different backends realize one mapping from airport
//! code to that code's record rows: the [`koa_trie::KoaTrie`] walks one
//! owned child edge per code character, the [`hilo_hash::HiloHash`] keys a
//! hash map on the whole code. Both are built once from a complete
//! ingestion pass and are read-only afterwards, and both must answer every
//! query identically for identical input.

mod error;
pub mod hilo_hash;
pub mod koa_trie;

pub use error::{IndexError, IndexResult};
pub use hilo_hash::HiloHash;
pub use koa_trie::KoaTrie;

use crate::error::query::QueryError;
use crate::model::DelayRecord;

/// The query contract shared by both index backends.
///
/// Callers (aggregation, ranking, trend) depend only on this capability,
/// never on the concrete structure behind it.
pub trait AirportIndex {
    /// Appends a record to the sequence stored under `code`, creating the
    /// entry on first insert. Per-code insertion order is preserved and
    /// duplicate month/year rows are all retained.
    fn insert(&mut self, code: &str, record: DelayRecord) -> IndexResult<()>;

    /// Returns the record sequence stored under `code`, or
    /// [`IndexError::NotFound`] when the code was never inserted.
    fn lookup(&self, code: &str) -> IndexResult<&[DelayRecord]>;

    /// Emits every (code, record sequence) pair in the index.
    ///
    /// Order is implementation-defined; ranking consumers re-sort
    /// explicitly.
    fn traverse_all(&self) -> Vec<(String, &[DelayRecord])>;
}

/// Which index backend to build.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    clap::ValueEnum,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    /// Character trie, one edge per code character.
    Trie,
    /// Direct hash map keyed on the whole code.
    Hash,
}

impl IndexKind {
    /// Parses an interactive index choice.
    ///
    /// Accepts the backend name or its menu number (`1` for the trie,
    /// `2` for the hash map), case-insensitively.
    pub fn from_choice(input: &str) -> Result<Self, QueryError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "trie" => Ok(Self::Trie),
            "2" | "hash" => Ok(Self::Hash),
            _ => Err(QueryError::UnknownBackend(input.to_string())),
        }
    }
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trie => write!(f, "trie"),
            Self::Hash => write!(f, "hash"),
        }
    }
}

/// Builds the chosen index backend from a complete ingestion pass.
///
/// # Arguments
///
/// * `kind` - Which backend to construct.
/// * `records` - The full record set, in ingestion order.
///
/// # Returns
///
/// * `Ok(Box<dyn AirportIndex>)` - The populated, read-only index.
/// * `Err(IndexError)` - If a record carries an empty code.
pub fn build_index(
    kind: IndexKind,
    records: Vec<DelayRecord>,
) -> IndexResult<Box<dyn AirportIndex>> {
    let count = records.len();
    let mut index: Box<dyn AirportIndex> = match kind {
        IndexKind::Trie => Box::new(KoaTrie::new()),
        IndexKind::Hash => Box::new(HiloHash::new()),
    };
    for record in records {
        let code = record.code.clone();
        index.insert(&code, record)?;
    }
    tracing::debug!(backend = %kind, records = count, "index built");
    Ok(index)
}
