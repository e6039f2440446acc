//! Koa Trie index implementation.
//!
//! A character trie keyed edge-by-edge on the airport code: lookup walks
//! one owned child per code character, so its cost depends on the code
//! length (3 for airport codes), never on the total record count. The tree
//! also supports a full traversal without a separate key-set structure,
//! which is what the ranking engine consumes.

mod node;

use node::TrieNode;

use crate::data_structures::{AirportIndex, IndexError, IndexResult};
use crate::model::DelayRecord;

/// Character trie mapping airport codes to their record rows.
///
/// Parent→child edges form a strict ownership tree: each node is
/// exclusively owned by its parent, so drop and recursive traversal need
/// no shared-pointer bookkeeping. Intermediate nodes carry no data.
#[derive(Debug, Default)]
pub struct KoaTrie {
    /// The root node of the trie. Reached by the empty path.
    root: TrieNode,

    /// Number of distinct terminal codes.
    codes: usize,
}

impl KoaTrie {
    /// Creates a new empty `KoaTrie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct codes in the trie.
    pub fn len(&self) -> usize {
        self.codes
    }

    /// Returns whether the trie holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes == 0
    }

    /// Walks the edge path for `code`, returning the terminal node if the
    /// whole path exists. No partial matching: the first absent edge ends
    /// the walk.
    fn node_for(&self, code: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in code.chars() {
            node = node.children.get(&c)?.as_ref();
        }
        Some(node)
    }

    /// Depth-first collection of every record-bearing node.
    ///
    /// Nodes do not store their key; the code is reconstructed from the
    /// first record attached to the node.
    fn collect<'a>(node: &'a TrieNode, out: &mut Vec<(String, &'a [DelayRecord])>) {
        if !node.records.is_empty() {
            out.push((node.records[0].code.clone(), node.records.as_slice()));
        }
        for child in node.children.values() {
            Self::collect(child, out);
        }
    }
}

impl AirportIndex for KoaTrie {
    fn insert(&mut self, code: &str, record: DelayRecord) -> IndexResult<()> {
        if code.is_empty() {
            return Err(IndexError::EmptyCode);
        }
        let mut node = &mut self.root;
        for c in code.chars() {
            node = node.children.entry(c).or_default().as_mut();
        }
        if !node.is_terminal {
            node.is_terminal = true;
            self.codes += 1;
        }
        node.records.push(record);
        Ok(())
    }

    fn lookup(&self, code: &str) -> IndexResult<&[DelayRecord]> {
        if code.is_empty() {
            return Err(IndexError::EmptyCode);
        }
        match self.node_for(code) {
            Some(node) if node.is_terminal => Ok(node.records.as_slice()),
            // Absent edge and bare intermediate node fail the same way:
            // a prefix of an inserted code is not a match.
            _ => Err(IndexError::NotFound(code.to_string())),
        }
    }

    fn traverse_all(&self) -> Vec<(String, &[DelayRecord])> {
        let mut out = Vec::with_capacity(self.codes);
        Self::collect(&self.root, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::test_utils::record;

    #[test]
    fn insert_and_lookup() {
        let mut trie = KoaTrie::new();
        assert!(trie.is_empty());

        trie.insert("ATL", record("ATL", "January", "2015", 10, 2, 100))
            .unwrap();
        trie.insert("ATL", record("ATL", "February", "2015", 20, 0, 200))
            .unwrap();

        assert_eq!(trie.len(), 1);
        let records = trie.lookup("ATL").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].month, "January");
        assert_eq!(records[1].month, "February");
    }

    #[test]
    fn lookup_unknown_code_is_not_found() {
        let mut trie = KoaTrie::new();
        trie.insert("ATL", record("ATL", "January", "2015", 10, 2, 100))
            .unwrap();
        assert!(matches!(trie.lookup("BOS"), Err(IndexError::NotFound(_))));
    }

    #[test]
    fn prefix_of_inserted_code_is_not_found() {
        let mut trie = KoaTrie::new();
        trie.insert("ATL", record("ATL", "January", "2015", 10, 2, 100))
            .unwrap();
        trie.insert("ATX", record("ATX", "January", "2015", 5, 1, 50))
            .unwrap();

        // "AT" exists as an intermediate node shared by both codes, but no
        // code "AT" was inserted.
        assert!(matches!(trie.lookup("AT"), Err(IndexError::NotFound(_))));
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.lookup("ATL").unwrap().len(), 1);
        assert_eq!(trie.lookup("ATX").unwrap().len(), 1);
    }

    #[test]
    fn empty_code_is_rejected() {
        let mut trie = KoaTrie::new();
        assert!(matches!(
            trie.insert("", record("", "January", "2015", 1, 0, 10)),
            Err(IndexError::EmptyCode)
        ));
        assert!(matches!(trie.lookup(""), Err(IndexError::EmptyCode)));
        assert!(trie.is_empty());
    }

    #[test]
    fn traverse_reconstructs_codes_from_records() {
        let mut trie = KoaTrie::new();
        for code in ["ATL", "ATX", "BOS"] {
            trie.insert(code, record(code, "January", "2015", 1, 0, 10))
                .unwrap();
        }

        let mut all = trie.traverse_all();
        all.sort_by(|a, b| a.0.cmp(&b.0));
        let codes: Vec<&str> = all.iter().map(|(code, _)| code.as_str()).collect();
        assert_eq!(codes, ["ATL", "ATX", "BOS"]);
        for (code, records) in &all {
            assert!(records.iter().all(|r| &r.code == code));
        }
    }
}
