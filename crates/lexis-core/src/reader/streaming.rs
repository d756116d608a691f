//! Streaming trie reader: query a node block stream without materializing
//! the trie.

use super::cursor::{CursorStats, TrieCursor};
use super::source::BlockSource;
use crate::codec::NodeBlock;
use crate::error::{Error, Result};
use crate::levenshtein::char_distance;
use crate::search::{validate_term, TermSearch};
use crate::word::{sort_by_distance, BlockLocator, Word};

/// Answers exact, prefix and fuzzy queries straight from a block stream.
///
/// Tree shape is rebuilt from each block's `depth`; whole subtrees are
/// bypassed with `skip(weight - 1)`. Every query restarts the source at its
/// first block, so one reader can serve successive queries, but a reader
/// (and its cursor) must not be shared between concurrent queries. Open one
/// reader per thread over the same stream instead.
///
/// # Examples
///
/// ```
/// use lexis_core::{codec, BytesBlockSource, LcrsTrie, StreamingTrieReader};
///
/// let trie = LcrsTrie::from_terms(["cat", "car", "cart", "dog"])?;
/// let mut bytes = Vec::new();
/// codec::write_blocks(&trie, &mut bytes)?;
///
/// let mut reader = StreamingTrieReader::new(BytesBlockSource::new(bytes));
/// assert!(reader.has_word("car")?);
/// assert_eq!(reader.near("cot", 1)?[0].value, "cat");
/// # Ok::<(), lexis_core::Error>(())
/// ```
#[derive(Debug)]
pub struct StreamingTrieReader<S> {
    cursor: TrieCursor<S>,
}

impl<S: BlockSource> StreamingTrieReader<S> {
    /// Creates a reader over a block source.
    pub fn new(source: S) -> Self {
        Self {
            cursor: TrieCursor::new(source),
        }
    }

    /// Block accounting of the most recent query.
    #[must_use]
    pub fn stats(&self) -> CursorStats {
        self.cursor.stats()
    }

    /// Returns the underlying source.
    pub fn into_inner(self) -> S {
        self.cursor.into_inner()
    }

    /// Returns whether `term` is in the stream.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty or whitespace-only term; `CorruptData`
    /// and I/O errors from the source.
    pub fn has_word(&mut self, term: &str) -> Result<bool> {
        validate_term(term, "term")?;
        self.begin_query()?;

        let path: Vec<char> = term.chars().collect();
        let found = self.seek_path(&path)?.is_some_and(|block| block.end_of_word);

        self.finish_query("has_word", term, usize::from(found));
        Ok(found)
    }

    /// Returns the postings locator stored for `term`, if present.
    ///
    /// # Errors
    ///
    /// See [`has_word`](Self::has_word).
    pub fn postings(&mut self, term: &str) -> Result<Option<BlockLocator>> {
        validate_term(term, "term")?;
        self.begin_query()?;

        let path: Vec<char> = term.chars().collect();
        let locator = self
            .seek_path(&path)?
            .filter(|block| block.end_of_word)
            .map(|block| block.postings);

        self.finish_query("postings", term, usize::from(locator.is_some()));
        Ok(locator)
    }

    /// Returns every term starting with `prefix` (itself included), in
    /// stream order.
    ///
    /// # Errors
    ///
    /// See [`has_word`](Self::has_word).
    pub fn starts_with(&mut self, prefix: &str) -> Result<Vec<Word>> {
        validate_term(prefix, "prefix")?;
        self.begin_query()?;

        let mut path: Vec<char> = prefix.chars().collect();
        let mut words = Vec::new();
        if let Some(block) = self.seek_path(&path)? {
            if block.end_of_word {
                words.push(Word::exact(prefix));
            }
            if block.has_child {
                let min_depth = depth_of(path.len())?;
                self.collect_subtree(min_depth, &mut path, &mut words)?;
            }
        }

        self.finish_query("starts_with", prefix, words.len());
        Ok(words)
    }

    /// Returns every term within `max_edits` edits of `term`, sorted
    /// ascending by distance.
    ///
    /// Only blocks whose spelled length lies in
    /// `[len(term) - max_edits, len(term) + max_edits]` are scored. A block
    /// whose spelled string is already longer than that window has its whole
    /// subtree skipped, so the scan touches a band of depths around the
    /// query length instead of the full vocabulary.
    ///
    /// # Errors
    ///
    /// See [`has_word`](Self::has_word).
    pub fn near(&mut self, term: &str, max_edits: usize) -> Result<Vec<Word>> {
        validate_term(term, "term")?;
        self.begin_query()?;

        let query: Vec<char> = term.chars().collect();
        let len = query.len();
        let mut path: Vec<char> = Vec::new();
        let mut words = Vec::new();

        while let Some(block) = self.cursor.step()? {
            let depth = block.depth as usize;
            descend(&mut path, depth, block.value)?;

            let reached_min =
                max_edits == 0 || (depth + 1).saturating_add(max_edits) >= len;
            let reached_max = depth >= len.saturating_add(max_edits);

            if reached_max {
                self.cursor.skip(block.weight - 1)?;
                continue;
            }

            if reached_min && block.end_of_word {
                let edits = char_distance(&query, &path);
                if edits <= max_edits {
                    words.push(Word::with_distance(path.iter().collect::<String>(), edits));
                }
            }
        }

        sort_by_distance(&mut words);
        self.finish_query("near", term, words.len());
        Ok(words)
    }

    /// Returns every term in the stream, in stream order.
    ///
    /// Reads every block; nothing is skipped.
    ///
    /// # Errors
    ///
    /// `CorruptData` and I/O errors from the source.
    pub fn words(&mut self) -> Result<Vec<Word>> {
        self.begin_query()?;

        let mut path = Vec::new();
        let mut words = Vec::new();
        self.collect_subtree(0, &mut path, &mut words)?;

        self.finish_query("words", "", words.len());
        Ok(words)
    }

    fn begin_query(&mut self) -> Result<()> {
        self.cursor.restart()?;
        self.cursor.reset_stats();
        Ok(())
    }

    fn finish_query(&self, query: &'static str, term: &str, results: usize) {
        let stats = self.cursor.stats();
        tracing::debug!(
            query,
            term,
            results,
            blocks_read = stats.blocks_read,
            blocks_skipped = stats.blocks_skipped,
            blocks_replayed = stats.blocks_replayed,
            "streaming trie query complete"
        );
    }

    /// Descends along `path` and returns the block spelling its last char.
    ///
    /// On success the cursor sits just past that block, i.e. on its first
    /// child when it has one.
    fn seek_path(&mut self, path: &[char]) -> Result<Option<NodeBlock>> {
        let mut depth = 0usize;

        while let Some(block) = self.cursor.step()? {
            let block_depth = block.depth as usize;

            if block_depth < depth {
                // Left the subtree of the last matched character.
                self.cursor.rewind();
                return Ok(None);
            }
            if block_depth > depth {
                // Inside a subtree irrelevant to the branch being sought.
                self.cursor.skip(block.weight - 1)?;
                continue;
            }

            if block.value == path[depth] {
                if depth == path.len() - 1 {
                    return Ok(Some(block));
                }
                if !block.has_child {
                    return Ok(None);
                }
                depth += 1;
            } else {
                self.cursor.skip(block.weight - 1)?;
                if !block.has_sibling {
                    return Ok(None);
                }
            }
        }
        Ok(None)
    }

    /// Depth-first enumeration of every block at `min_depth` or deeper until
    /// the stream climbs above `min_depth`.
    ///
    /// `path` holds the first `min_depth` spelled chars on entry and acts as
    /// the frame stack: a block at depth `d` truncates it to `d` chars (the
    /// branch point) and pushes its own char. Once a block above the bound
    /// is read the cursor is rewound so the caller sees it again.
    fn collect_subtree(
        &mut self,
        min_depth: u32,
        path: &mut Vec<char>,
        words: &mut Vec<Word>,
    ) -> Result<()> {
        while let Some(block) = self.cursor.step()? {
            if block.depth < min_depth {
                self.cursor.rewind();
                break;
            }

            descend(path, block.depth as usize, block.value)?;
            if block.end_of_word {
                words.push(Word::exact(path.iter().collect::<String>()));
            }
        }
        Ok(())
    }
}

impl<S: BlockSource> TermSearch for StreamingTrieReader<S> {
    fn has_word(&mut self, term: &str) -> Result<bool> {
        StreamingTrieReader::has_word(self, term)
    }

    fn starts_with(&mut self, prefix: &str) -> Result<Vec<Word>> {
        StreamingTrieReader::starts_with(self, prefix)
    }

    fn near(&mut self, term: &str, max_edits: usize) -> Result<Vec<Word>> {
        StreamingTrieReader::near(self, term, max_edits)
    }
}

/// Positions `path` at the branch point of a block at `depth` and appends
/// its char.
fn descend(path: &mut Vec<char>, depth: usize, value: char) -> Result<()> {
    if depth > path.len() {
        return Err(Error::CorruptData(format!(
            "block at depth {depth} follows a path of length {}",
            path.len()
        )));
    }
    path.truncate(depth);
    path.push(value);
    Ok(())
}

fn depth_of(len: usize) -> Result<u32> {
    u32::try_from(len)
        .map_err(|_| Error::InvalidArgument(format!("term of {len} chars is too long")))
}
