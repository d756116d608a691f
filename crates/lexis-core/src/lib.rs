//! # `Lexis` Core
//!
//! Term dictionary for full-text search engines, stored as a
//! left-child/right-sibling (LCRS) trie.
//!
//! `Lexis` answers three questions about an indexed vocabulary: is this
//! exact term present, which terms start with this prefix, and which terms
//! are within `k` edits of this term. It answers them from two
//! interchangeable backends:
//!
//! - **In-memory**: [`LcrsTrie`], built while indexing
//! - **Streaming**: [`StreamingTrieReader`], which replays the trie's
//!   fixed-width [`NodeBlock`] stream from a file or memory map, skipping
//!   whole subtrees, and never rebuilds the tree
//!
//! Every term carries a [`BlockLocator`] into an external postings store;
//! this crate stores it and hands it back, nothing more.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lexis_core::{write_index, BlockLocator, LcrsTrie, TermIndex};
//!
//! let mut trie = LcrsTrie::new();
//! trie.insert("cat", BlockLocator::new(0, 64))?;
//! trie.insert("cart", BlockLocator::new(64, 32))?;
//! trie.add("dog")?;
//!
//! write_index("./lexis_data", &trie)?;
//!
//! let index = TermIndex::open("./lexis_data")?;
//! let mut reader = index.reader()?;
//! assert!(reader.has_word("cart")?);
//! for word in reader.near("cot", 1)? {
//!     println!("{} ({} edits)", word.value, word.distance);
//! }
//! # Ok::<(), lexis_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
// =============================================================================
// NUMERIC CAST LINTS
// =============================================================================
// Block fields are fixed-width u32/u64; prefer try_from() where a value can
// actually overflow (see codec::walk).
// =============================================================================
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
// =============================================================================
// STYLISTIC LINTS
// =============================================================================
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::redundant_pub_crate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::wildcard_imports)]
#![allow(clippy::missing_errors_doc)]

pub mod codec;
pub mod config;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod levenshtein;
pub mod reader;
pub mod search;
pub mod storage;
pub mod trie;
pub mod word;
#[cfg(test)]
mod word_tests;

pub use codec::NodeBlock;
pub use config::{ConfigError, LexisConfig};
pub use error::{Error, Result};
pub use reader::{
    BlockSource, BytesBlockSource, CursorStats, ReaderBlockSource, StreamingTrieReader,
    TrieCursor,
};
pub use search::TermSearch;
pub use storage::{write_index, IndexMeta, TermIndex};
pub use trie::LcrsTrie;
pub use word::{BlockLocator, Word};
