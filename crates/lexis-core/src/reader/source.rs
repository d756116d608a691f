//! Sequential sources of node blocks.

use crate::codec::{NodeBlock, BLOCK_SIZE};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

/// Forward-only source of encoded node blocks.
///
/// Implementations never interpret the tree; they only hand out blocks in
/// stream order and seek past whole blocks.
pub trait BlockSource {
    /// Decodes and returns the next block, or `None` once the stream ends.
    ///
    /// # Errors
    ///
    /// Returns `CorruptData` for a partial trailing block or an undecodable
    /// record, and propagates I/O failures unchanged.
    fn read_block(&mut self) -> Result<Option<NodeBlock>>;

    /// Advances past exactly `count` blocks without decoding them.
    ///
    /// Skipping beyond the end exhausts the source.
    ///
    /// # Errors
    ///
    /// Returns `CorruptData` when a source that can see its own length finds
    /// the skip crossing a partial trailing block; propagates I/O failures
    /// unchanged.
    fn skip_blocks(&mut self, count: u64) -> Result<()>;

    /// Repositions the source at the first block.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures unchanged.
    fn restart(&mut self) -> Result<()>;
}

/// Block source over an in-memory byte buffer or memory map.
#[derive(Debug, Clone)]
pub struct BytesBlockSource<B> {
    bytes: B,
    position: usize,
}

impl<B: AsRef<[u8]>> BytesBlockSource<B> {
    /// Creates a source positioned at the first block of `bytes`.
    #[must_use]
    pub fn new(bytes: B) -> Self {
        Self { bytes, position: 0 }
    }

    /// Number of whole blocks in the buffer.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.bytes.as_ref().len() / BLOCK_SIZE
    }

    /// Returns the underlying buffer.
    pub fn into_inner(self) -> B {
        self.bytes
    }
}

impl<B: AsRef<[u8]>> BlockSource for BytesBlockSource<B> {
    fn read_block(&mut self) -> Result<Option<NodeBlock>> {
        let bytes = self.bytes.as_ref();
        if self.position >= bytes.len() {
            return Ok(None);
        }

        let end = self.position + BLOCK_SIZE;
        if end > bytes.len() {
            return Err(Error::CorruptData(format!(
                "truncated block at byte {} of {}",
                self.position,
                bytes.len()
            )));
        }

        let block = NodeBlock::decode(&bytes[self.position..end])?;
        self.position = end;
        Ok(Some(block))
    }

    fn skip_blocks(&mut self, count: u64) -> Result<()> {
        let len = self.bytes.as_ref().len();
        let delta = usize::try_from(count)
            .ok()
            .and_then(|blocks| blocks.checked_mul(BLOCK_SIZE))
            .unwrap_or(usize::MAX);
        let target = self.position.saturating_add(delta);

        let whole = len - len % BLOCK_SIZE;
        if whole != len && target > whole {
            return Err(Error::CorruptData(format!(
                "skip to byte {target} crosses the truncated block at byte {whole} of {len}"
            )));
        }
        self.position = target.min(len);
        Ok(())
    }

    fn restart(&mut self) -> Result<()> {
        self.position = 0;
        Ok(())
    }
}

/// Block source over a seekable byte stream, typically a file.
///
/// Reads go through a `BufReader`; skips are relative seeks, so a skipped
/// subtree is never read from disk unless it falls inside the buffer.
#[derive(Debug)]
pub struct ReaderBlockSource<R> {
    reader: BufReader<R>,
}

impl ReaderBlockSource<File> {
    /// Opens a block stream file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(File::open(path)?))
    }
}

impl<R: Read + Seek> ReaderBlockSource<R> {
    /// Wraps a reader positioned at the first block.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

impl<R: Read + Seek> BlockSource for ReaderBlockSource<R> {
    fn read_block(&mut self) -> Result<Option<NodeBlock>> {
        let mut buf = [0u8; BLOCK_SIZE];
        let mut filled = 0;
        while filled < BLOCK_SIZE {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }

        match filled {
            0 => Ok(None),
            BLOCK_SIZE => NodeBlock::decode(&buf).map(Some),
            partial => Err(Error::CorruptData(format!(
                "truncated block: read {partial} of {BLOCK_SIZE} bytes"
            ))),
        }
    }

    fn skip_blocks(&mut self, count: u64) -> Result<()> {
        let bytes = count
            .checked_mul(BLOCK_SIZE as u64)
            .and_then(|b| i64::try_from(b).ok())
            .ok_or_else(|| Error::InvalidArgument(format!("cannot skip {count} blocks")))?;
        self.reader.seek_relative(bytes)?;
        Ok(())
    }

    fn restart(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(0))?;
        Ok(())
    }
}
