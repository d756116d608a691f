//! Arena node of the in-memory LCRS trie.

use crate::word::BlockLocator;

/// Index of a node in the trie arena.
pub type NodeId = usize;

/// Arena slot of the sentinel root.
pub(crate) const ROOT: NodeId = 0;

/// One character branch of the trie.
///
/// `left_child` heads the chain of next-character branches; `right_sibling`
/// switches to an alternative branch at the same depth and never extends the
/// spelled prefix.
#[derive(Debug, Clone)]
pub(crate) struct TrieNode {
    pub(crate) value: char,
    pub(crate) end_of_word: bool,
    /// Meaningful only when `end_of_word` is set.
    pub(crate) postings: BlockLocator,
    pub(crate) left_child: Option<NodeId>,
    pub(crate) right_sibling: Option<NodeId>,
}

impl TrieNode {
    pub(crate) fn new(value: char, right_sibling: Option<NodeId>) -> Self {
        Self {
            value,
            end_of_word: false,
            postings: BlockLocator::NONE,
            left_child: None,
            right_sibling,
        }
    }

    pub(crate) fn root() -> Self {
        Self::new('\0', None)
    }
}
