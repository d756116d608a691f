//! Forward-only block cursor with one block of rewind.

use super::source::BlockSource;
use crate::codec::NodeBlock;
use crate::error::Result;

/// Block accounting for the current query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorStats {
    /// Blocks decoded from the source.
    pub blocks_read: u64,
    /// Blocks passed over by `skip` without decoding.
    pub blocks_skipped: u64,
    /// Blocks handed out again after a rewind.
    pub blocks_replayed: u64,
}

/// Cursor over a [`BlockSource`] exposing `step`, `skip` and a single
/// block of rewind.
///
/// A rewind puts the last block returned by [`step`](Self::step) back, so a
/// traversal that read one block too far (the first block outside the
/// subtree it was scanning) can hand it to the next caller.
#[derive(Debug)]
pub struct TrieCursor<S> {
    source: S,
    last_read: Option<NodeBlock>,
    replay: Option<NodeBlock>,
    stats: CursorStats,
}

impl<S: BlockSource> TrieCursor<S> {
    /// Wraps a source positioned at its first block.
    pub fn new(source: S) -> Self {
        Self {
            source,
            last_read: None,
            replay: None,
            stats: CursorStats::default(),
        }
    }

    /// Returns the next block, consuming a pending replay first.
    ///
    /// # Errors
    ///
    /// Propagates source errors unchanged.
    pub fn step(&mut self) -> Result<Option<NodeBlock>> {
        if let Some(block) = self.replay.take() {
            self.stats.blocks_replayed += 1;
            return Ok(Some(block));
        }

        let block = self.source.read_block()?;
        if block.is_some() {
            self.stats.blocks_read += 1;
        }
        self.last_read = block;
        Ok(block)
    }

    /// Advances past exactly `count` blocks.
    ///
    /// A pending replay counts as the first skipped block.
    ///
    /// # Errors
    ///
    /// Propagates source errors unchanged.
    pub fn skip(&mut self, count: u32) -> Result<()> {
        let mut remaining = u64::from(count);
        if remaining == 0 {
            return Ok(());
        }
        if self.replay.take().is_some() {
            remaining -= 1;
        }
        if remaining > 0 {
            self.source.skip_blocks(remaining)?;
            self.stats.blocks_skipped += remaining;
        }
        self.last_read = None;
        Ok(())
    }

    /// Puts the last stepped block back; the next `step` returns it again.
    ///
    /// No-op if the last step hit the end of the stream.
    pub fn rewind(&mut self) {
        self.replay = self.last_read;
    }

    /// Repositions at the first block and drops any pending replay.
    ///
    /// # Errors
    ///
    /// Propagates source errors unchanged.
    pub fn restart(&mut self) -> Result<()> {
        self.source.restart()?;
        self.last_read = None;
        self.replay = None;
        Ok(())
    }

    /// Block accounting since the last [`reset_stats`](Self::reset_stats).
    #[must_use]
    pub fn stats(&self) -> CursorStats {
        self.stats
    }

    /// Clears the block accounting.
    pub fn reset_stats(&mut self) {
        self.stats = CursorStats::default();
    }

    /// Returns the underlying source.
    pub fn into_inner(self) -> S {
        self.source
    }
}
