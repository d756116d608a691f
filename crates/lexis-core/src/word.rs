//! Query results and postings locators.

use serde::{Deserialize, Serialize};

/// Opaque pointer into an external postings store.
///
/// Set on the terminating node of every inserted term. This crate never
/// reads or validates the bytes it locates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockLocator {
    /// Byte offset of the postings block.
    pub offset: u64,
    /// Length of the postings block in bytes.
    pub length: u32,
}

impl BlockLocator {
    /// Locator used for terms indexed without postings.
    pub const NONE: Self = Self {
        offset: 0,
        length: 0,
    };

    /// Creates a new locator.
    #[must_use]
    pub const fn new(offset: u64, length: u32) -> Self {
        Self { offset, length }
    }
}

/// A term returned by a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    /// The indexed term.
    pub value: String,
    /// Edit distance from the query (0 for exact and prefix results).
    pub distance: usize,
}

impl Word {
    /// Creates an exact match (distance 0).
    #[must_use]
    pub fn exact(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            distance: 0,
        }
    }

    /// Creates a fuzzy match at the given edit distance.
    #[must_use]
    pub fn with_distance(value: impl Into<String>, distance: usize) -> Self {
        Self {
            value: value.into(),
            distance,
        }
    }
}

/// Sorts words ascending by distance, ties broken by term value.
pub fn sort_by_distance(words: &mut [Word]) {
    words.sort_unstable_by(|a, b| {
        a.distance
            .cmp(&b.distance)
            .then_with(|| a.value.cmp(&b.value))
    });
}
