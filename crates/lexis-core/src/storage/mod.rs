//! On-disk term indexes.
//!
//! An index is a directory holding the node block stream and its metadata:
//!
//! ```text
//! <dir>/
//! ├── terms.lcrs   # node blocks, BLOCK_SIZE bytes each, stream order
//! └── terms.meta   # bincode IndexMeta (version, block size, counts)
//! ```
//!
//! The block stream is written before the metadata, so a directory whose
//! `terms.meta` exists holds a complete stream. Readers never materialize
//! the trie: [`TermIndex::reader`] streams the file through a buffered
//! handle and [`TermIndex::mapped_reader`] streams a shared memory map.

mod index;
mod meta;

pub use index::{write_index, TermIndex, META_FILE, TERMS_FILE};
#[cfg(feature = "persistence")]
pub use index::MappedBlocks;
pub use meta::{IndexMeta, FORMAT_VERSION};
