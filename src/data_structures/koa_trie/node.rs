//! Node implementation for the Koa Trie.
//!
//! Nodes are the building blocks of the trie: one owned child per edge
//! character, and the record rows attached at terminal nodes.

use fnv::FnvHashMap;

use crate::model::DelayRecord;

/// A node in the Koa Trie.
///
/// Each node represents one character of a code path. Terminal nodes carry
/// the record rows of the code that ends there; a node does not store the
/// code string itself.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Map of edge characters to owned child nodes.
    pub children: FnvHashMap<char, Box<TrieNode>>,

    /// Whether a full code ends at this node.
    pub is_terminal: bool,

    /// Record rows for the code ending here, in insertion order.
    pub records: Vec<DelayRecord>,
}
