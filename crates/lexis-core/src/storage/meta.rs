//! Index metadata persisted next to the block stream.

use crate::codec::BLOCK_SIZE;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// On-disk format version written by this crate.
pub const FORMAT_VERSION: u32 = 1;

/// Shape of a persisted term index, stored bincode-encoded in `terms.meta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexMeta {
    /// Layout version of the block stream.
    pub format_version: u32,
    /// Width of one node block in bytes.
    pub block_size: u32,
    /// Number of distinct terms.
    pub term_count: u64,
    /// Number of node blocks in `terms.lcrs`.
    pub node_count: u64,
}

impl IndexMeta {
    /// Metadata for a stream of `node_count` blocks holding `term_count` terms.
    #[must_use]
    pub const fn new(term_count: u64, node_count: u64) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            block_size: BLOCK_SIZE as u32,
            term_count,
            node_count,
        }
    }

    /// Expected byte length of the block stream.
    #[must_use]
    pub const fn stream_len(&self) -> u64 {
        self.node_count.saturating_mul(self.block_size as u64)
    }

    /// Checks version and block width against what this crate reads.
    ///
    /// # Errors
    ///
    /// Returns `CorruptData` on any mismatch.
    pub fn validate(&self) -> Result<()> {
        if self.format_version != FORMAT_VERSION {
            return Err(Error::CorruptData(format!(
                "unsupported format version {} (expected {FORMAT_VERSION})",
                self.format_version
            )));
        }
        if self.block_size as usize != BLOCK_SIZE {
            return Err(Error::CorruptData(format!(
                "block size {} (expected {BLOCK_SIZE})",
                self.block_size
            )));
        }
        if self.term_count > self.node_count {
            return Err(Error::CorruptData(format!(
                "{} terms cannot fit in {} nodes",
                self.term_count, self.node_count
            )));
        }
        Ok(())
    }

    pub(crate) fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        bincode::serialize_into(writer, self)?;
        Ok(())
    }

    pub(crate) fn read_from<R: Read>(reader: R) -> Result<Self> {
        bincode::deserialize_from(reader)
            .map_err(|e| Error::CorruptData(format!("unreadable index metadata: {e}")))
    }
}
