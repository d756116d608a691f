//! Writing and opening term index directories.

use super::meta::IndexMeta;
use crate::codec;
use crate::error::{Error, Result};
use crate::reader::{ReaderBlockSource, StreamingTrieReader};
use crate::trie::LcrsTrie;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "persistence")]
use crate::reader::BytesBlockSource;
#[cfg(feature = "persistence")]
use memmap2::Mmap;
#[cfg(feature = "persistence")]
use std::sync::Arc;

/// File holding the node block stream.
pub const TERMS_FILE: &str = "terms.lcrs";

/// File holding the bincode-encoded [`IndexMeta`].
pub const META_FILE: &str = "terms.meta";

/// Encodes `trie` into `dir`, creating the directory if needed.
///
/// Existing index files in `dir` are overwritten in place, so no
/// [`TermIndex`] may be open on `dir` meanwhile.
///
/// # Errors
///
/// Returns an error if the directory or either file cannot be written, or
/// if encoding fails.
pub fn write_index<P: AsRef<Path>>(dir: P, trie: &LcrsTrie) -> Result<IndexMeta> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut writer = BufWriter::new(File::create(dir.join(TERMS_FILE))?);
    let node_count = codec::write_blocks(trie, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;

    let meta = IndexMeta::new(trie.len() as u64, node_count);
    let mut writer = BufWriter::new(File::create(dir.join(META_FILE))?);
    meta.write_to(&mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;

    tracing::info!(
        path = %dir.display(),
        terms = meta.term_count,
        nodes = meta.node_count,
        "term index written"
    );
    Ok(meta)
}

/// Read-only handle on a persisted term index.
///
/// Opening validates the metadata against the block stream; every reader
/// handed out afterwards is independent, so one reader per thread may query
/// the same index concurrently.
#[derive(Debug)]
pub struct TermIndex {
    dir: PathBuf,
    meta: IndexMeta,
    #[cfg(feature = "persistence")]
    map: MappedBlocks,
}

impl TermIndex {
    /// Opens the index stored in `dir`.
    ///
    /// # Errors
    ///
    /// - `IndexNotFound` if `dir` or its metadata file does not exist
    /// - `CorruptData` if the metadata is unreadable or disagrees with the
    ///   block stream (version, block size, stream length)
    /// - `Io` for any other file system failure
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        let meta_file = File::open(dir.join(META_FILE)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::IndexNotFound(dir.display().to_string()),
            _ => Error::Io(e),
        })?;
        let meta = IndexMeta::read_from(BufReader::new(meta_file))?;
        meta.validate()?;

        let terms_path = dir.join(TERMS_FILE);
        let terms_file = File::open(&terms_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                Error::CorruptData(format!("metadata present but {TERMS_FILE} is missing"))
            }
            _ => Error::Io(e),
        })?;
        let actual_len = terms_file.metadata()?.len();
        if actual_len != meta.stream_len() {
            return Err(Error::CorruptData(format!(
                "{TERMS_FILE} holds {actual_len} bytes, metadata expects {}",
                meta.stream_len()
            )));
        }

        #[cfg(feature = "persistence")]
        let map = MappedBlocks::map(&terms_file, actual_len)?;

        tracing::info!(
            path = %dir.display(),
            terms = meta.term_count,
            nodes = meta.node_count,
            "term index opened"
        );

        Ok(Self {
            dir,
            meta,
            #[cfg(feature = "persistence")]
            map,
        })
    }

    /// Metadata read at open time.
    #[must_use]
    pub fn meta(&self) -> &IndexMeta {
        &self.meta
    }

    /// Directory the index was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Returns a reader streaming the block file through a buffered handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the block file cannot be opened.
    pub fn reader(&self) -> Result<StreamingTrieReader<ReaderBlockSource<File>>> {
        let source = ReaderBlockSource::open(self.dir.join(TERMS_FILE))?;
        Ok(StreamingTrieReader::new(source))
    }

    /// Returns a reader over the memory map shared by every reader of this
    /// index.
    #[cfg(feature = "persistence")]
    #[must_use]
    pub fn mapped_reader(&self) -> StreamingTrieReader<BytesBlockSource<MappedBlocks>> {
        StreamingTrieReader::new(BytesBlockSource::new(self.map.clone()))
    }
}

/// Cheaply cloneable read-only view of a mapped block stream.
#[cfg(feature = "persistence")]
#[derive(Debug, Clone)]
pub struct MappedBlocks(Option<Arc<Mmap>>);

#[cfg(feature = "persistence")]
impl MappedBlocks {
    fn map(file: &File, len: u64) -> Result<Self> {
        // Zero-length mappings are rejected on some platforms.
        if len == 0 {
            return Ok(Self(None));
        }
        // SAFETY: the file is opened read-only and its length was checked
        // against the metadata. An index directory must not be rewritten with
        // write_index while a TermIndex over it is alive.
        let mmap = unsafe { Mmap::map(file)? };
        Ok(Self(Some(Arc::new(mmap))))
    }
}

#[cfg(feature = "persistence")]
impl AsRef<[u8]> for MappedBlocks {
    fn as_ref(&self) -> &[u8] {
        self.0.as_deref().map_or(&[][..], |mmap| &mmap[..])
    }
}
