//! Streaming trie reader.
//!
//! Replays a node block stream produced by the [`codec`](crate::codec) and
//! answers the same queries as the in-memory [`LcrsTrie`](crate::LcrsTrie)
//! without rebuilding it.
//!
//! # Architecture
//!
//! ```text
//! BlockSource (bytes / mmap / file)
//!     └── TrieCursor       step(), skip(n), one-block rewind
//!           └── StreamingTrieReader   has_word / starts_with / near
//! ```
//!
//! - No parent pointers: a block's `depth` tells the reader whether it
//!   descended, moved to a sibling or climbed back out of a subtree.
//! - Each block is decoded at most once per query; subtrees that cannot
//!   contribute are passed over with `skip(weight - 1)`.
//! - Memory use is one path buffer plus one rewind slot, independent of the
//!   vocabulary size.

mod cursor;
mod source;
mod streaming;

pub use cursor::{CursorStats, TrieCursor};
pub use source::{BlockSource, BytesBlockSource, ReaderBlockSource};
pub use streaming::StreamingTrieReader;
