//! Query seam shared by the in-memory trie and the streaming reader.
//!
//! Both backends are interchangeable: for the same vocabulary they return
//! the same result sets. `near` results are sorted ascending by distance
//! (ties by term value) in both.

use crate::error::{Error, Result};
use crate::word::Word;

/// Exact, prefix and approximate term lookup.
///
/// Methods take `&mut self` because the streaming backend owns a stateful
/// cursor; the in-memory trie never mutates during a query.
pub trait TermSearch {
    /// Returns whether `term` was inserted.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty or whitespace-only term; the streaming
    /// backend also propagates I/O and `CorruptData` errors.
    fn has_word(&mut self, term: &str) -> Result<bool>;

    /// Returns every inserted term that starts with `prefix`, unordered.
    ///
    /// `prefix` itself is included when it is an inserted term.
    ///
    /// # Errors
    ///
    /// See [`TermSearch::has_word`].
    fn starts_with(&mut self, prefix: &str) -> Result<Vec<Word>>;

    /// Returns every inserted term within `max_edits` of `term`.
    ///
    /// # Errors
    ///
    /// See [`TermSearch::has_word`].
    fn near(&mut self, term: &str, max_edits: usize) -> Result<Vec<Word>>;
}

/// Rejects empty and whitespace-only terms.
pub(crate) fn validate_term(term: &str, what: &str) -> Result<()> {
    if term.trim().is_empty() {
        return Err(Error::InvalidArgument(format!(
            "{what} must not be empty or whitespace"
        )));
    }
    Ok(())
}
