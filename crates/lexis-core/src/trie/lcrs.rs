//! In-memory left-child/right-sibling trie.

use super::node::{NodeId, TrieNode, ROOT};
use crate::error::Result;
use crate::levenshtein::{advance_row, first_row};
use crate::search::{validate_term, TermSearch};
use crate::word::{sort_by_distance, BlockLocator, Word};

/// Left-child/right-sibling trie built while indexing.
///
/// Nodes live in an arena owned by the trie and link to each other through
/// [`NodeId`] handles. A child is always allocated after its parent, so a
/// node's id is smaller than the id of every node in its subtree.
///
/// # Examples
///
/// ```
/// use lexis_core::LcrsTrie;
///
/// let mut trie = LcrsTrie::new();
/// trie.add("cat")?;
/// trie.add("cart")?;
///
/// assert!(trie.has_word("cat")?);
/// assert!(!trie.has_word("ca")?);
/// assert_eq!(trie.starts_with("car")?.len(), 1);
/// # Ok::<(), lexis_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct LcrsTrie {
    nodes: Vec<TrieNode>,
    term_count: usize,
}

impl Default for LcrsTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl LcrsTrie {
    /// Creates an empty trie holding only the sentinel root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::root()],
            term_count: 0,
        }
    }

    /// Builds a trie from terms, each indexed without postings.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` on the first empty or whitespace-only term.
    pub fn from_terms<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for term in terms {
            trie.add(term.as_ref())?;
        }
        Ok(trie)
    }

    /// Number of distinct terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.term_count
    }

    /// Returns true if no term was inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.term_count == 0
    }

    /// Number of character nodes, excluding the sentinel root.
    ///
    /// This is also the number of blocks the trie encodes to.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Inserts a term without postings.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `term` is empty or whitespace-only.
    pub fn add(&mut self, term: &str) -> Result<()> {
        self.insert(term, BlockLocator::NONE)
    }

    /// Inserts a term and records its postings locator.
    ///
    /// Re-inserting a term leaves the term count unchanged and replaces the
    /// stored locator.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `term` is empty or whitespace-only; the
    /// trie is left untouched in that case.
    pub fn insert(&mut self, term: &str, locator: BlockLocator) -> Result<()> {
        validate_term(term, "term")?;

        let mut parent = ROOT;
        let mut chars = term.chars().peekable();
        while let Some(ch) = chars.next() {
            let node = match self.find_child(parent, ch) {
                Some(id) => id,
                None => self.push_child(parent, ch),
            };

            if chars.peek().is_none() {
                let slot = &mut self.nodes[node];
                if !slot.end_of_word {
                    slot.end_of_word = true;
                    self.term_count += 1;
                }
                slot.postings = locator;
            }
            parent = node;
        }
        Ok(())
    }

    /// Returns whether `term` was inserted.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `term` is empty or whitespace-only.
    pub fn has_word(&self, term: &str) -> Result<bool> {
        validate_term(term, "term")?;
        Ok(self
            .find_path(term)
            .is_some_and(|id| self.nodes[id].end_of_word))
    }

    /// Returns the postings locator recorded for `term`, if it was inserted.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `term` is empty or whitespace-only.
    pub fn postings(&self, term: &str) -> Result<Option<BlockLocator>> {
        validate_term(term, "term")?;
        Ok(self
            .find_path(term)
            .map(|id| &self.nodes[id])
            .filter(|node| node.end_of_word)
            .map(|node| node.postings))
    }

    /// Returns every inserted term starting with `prefix`, unordered.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `prefix` is empty or whitespace-only.
    pub fn starts_with(&self, prefix: &str) -> Result<Vec<Word>> {
        validate_term(prefix, "prefix")?;

        let mut words = Vec::new();
        let Some(id) = self.find_path(prefix) else {
            return Ok(words);
        };

        let node = &self.nodes[id];
        if node.end_of_word {
            words.push(Word::exact(prefix));
        }
        let mut path: Vec<char> = prefix.chars().collect();
        let base = path.len();
        self.collect_words(node.left_child, &mut path, base, &mut words);
        Ok(words)
    }

    /// Returns every inserted term within `max_edits` edits of `term`,
    /// sorted ascending by distance.
    ///
    /// Each visited node extends the Levenshtein row of its parent by one
    /// character. A branch is not descended once every cell of its row
    /// exceeds `max_edits`: no extension of that spelled prefix can come back
    /// within the bound.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `term` is empty or whitespace-only.
    pub fn near(&self, term: &str, max_edits: usize) -> Result<Vec<Word>> {
        validate_term(term, "term")?;

        let query: Vec<char> = term.chars().collect();
        let mut words = Vec::new();

        // rows[d] is the distance row of the first d spelled characters.
        let mut rows: Vec<Vec<usize>> = vec![first_row(query.len())];
        let mut row = Vec::with_capacity(query.len() + 1);
        let mut path: Vec<char> = Vec::new();
        let mut stack: Vec<(NodeId, usize)> = Vec::new();
        if let Some(first) = self.nodes[ROOT].left_child {
            stack.push((first, 0));
        }

        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id];
            if let Some(sibling) = node.right_sibling {
                stack.push((sibling, depth));
            }

            path.truncate(depth);
            path.push(node.value);
            rows.truncate(depth + 1);
            advance_row(&rows[depth], &query, node.value, &mut row);

            let edits = row[query.len()];
            if node.end_of_word && edits <= max_edits {
                words.push(Word::with_distance(path.iter().collect::<String>(), edits));
            }

            let reachable = row.iter().any(|&cell| cell <= max_edits);
            if let (true, Some(child)) = (reachable, node.left_child) {
                rows.push(row.clone());
                stack.push((child, depth + 1));
            }
        }

        sort_by_distance(&mut words);
        Ok(words)
    }

    /// Returns every inserted term, unordered.
    #[must_use]
    pub fn words(&self) -> Vec<Word> {
        let mut words = Vec::with_capacity(self.term_count);
        let mut path = Vec::new();
        self.collect_words(self.nodes[ROOT].left_child, &mut path, 0, &mut words);
        words
    }

    /// Head of the root's child chain: the first node in encoding order.
    pub(crate) fn first_node(&self) -> Option<NodeId> {
        self.nodes[ROOT].left_child
    }

    pub(crate) fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id]
    }

    /// Size of every node's subtree (itself plus all descendants, siblings
    /// excluded), indexed by [`NodeId`].
    pub(crate) fn subtree_weights(&self) -> Vec<u64> {
        let mut weights = vec![1u64; self.nodes.len()];
        // Children sit at higher ids than their parent, so a reverse sweep
        // finalizes every subtree before its parent reads it.
        for id in (0..self.nodes.len()).rev() {
            let mut child = self.nodes[id].left_child;
            while let Some(c) = child {
                debug_assert!(c > id);
                weights[id] += weights[c];
                child = self.nodes[c].right_sibling;
            }
        }
        weights
    }

    /// Left-biased depth-first walk from `start` and its siblings, emitting
    /// every terminating node. `path` holds the first `base` spelled chars.
    fn collect_words(
        &self,
        start: Option<NodeId>,
        path: &mut Vec<char>,
        base: usize,
        words: &mut Vec<Word>,
    ) {
        let mut stack: Vec<(NodeId, usize)> = start.map(|id| (id, base)).into_iter().collect();

        while let Some((id, len)) = stack.pop() {
            let node = &self.nodes[id];
            if let Some(sibling) = node.right_sibling {
                stack.push((sibling, len));
            }

            path.truncate(len);
            path.push(node.value);
            if node.end_of_word {
                words.push(Word::exact(path.iter().collect::<String>()));
            }

            if let Some(child) = node.left_child {
                stack.push((child, len + 1));
            }
        }
    }

    fn find_child(&self, parent: NodeId, ch: char) -> Option<NodeId> {
        let mut child = self.nodes[parent].left_child;
        while let Some(id) = child {
            if self.nodes[id].value == ch {
                return Some(id);
            }
            child = self.nodes[id].right_sibling;
        }
        None
    }

    /// Prepends a new node to `parent`'s child chain.
    fn push_child(&mut self, parent: NodeId, ch: char) -> NodeId {
        let id = self.nodes.len();
        let previous_head = self.nodes[parent].left_child;
        self.nodes.push(TrieNode::new(ch, previous_head));
        self.nodes[parent].left_child = Some(id);
        id
    }

    fn find_path(&self, path: &str) -> Option<NodeId> {
        path.chars()
            .try_fold(ROOT, |node, ch| self.find_child(node, ch))
            .filter(|&id| id != ROOT)
    }
}

impl TermSearch for LcrsTrie {
    fn has_word(&mut self, term: &str) -> Result<bool> {
        LcrsTrie::has_word(self, term)
    }

    fn starts_with(&mut self, prefix: &str) -> Result<Vec<Word>> {
        LcrsTrie::starts_with(self, prefix)
    }

    fn near(&mut self, term: &str, max_edits: usize) -> Result<Vec<Word>> {
        LcrsTrie::near(self, term, max_edits)
    }
}
