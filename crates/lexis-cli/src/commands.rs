//! Command execution against an index directory.

use crate::import;
use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use lexis_core::{write_index, BlockSource, LexisConfig, StreamingTrieReader, TermIndex, Word};
use std::path::Path;

/// A read-only query against an existing index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Exact lookup with postings.
    Has(String),
    /// Every term sharing a prefix.
    Prefix(String),
    /// Every term within an edit bound.
    Near(String, usize),
    /// Every term in the index.
    Dump,
}

/// Builds an index from a term list file.
pub fn build(terms: &Path, index_dir: &Path, format: OutputFormat) -> Result<()> {
    let trie = import::load_terms(terms)?;
    let meta = write_index(index_dir, &trie)
        .with_context(|| format!("cannot write index to {}", index_dir.display()))?;
    output::print_meta(index_dir, &meta, format)
}

/// Prints the metadata of an index.
pub fn info(index_dir: &Path, format: OutputFormat) -> Result<()> {
    let index = open(index_dir)?;
    output::print_meta(index.path(), index.meta(), format)
}

/// Runs a query through the mapped or the buffered-file reader, per
/// `storage.use_mmap`.
pub fn run_query(
    index_dir: &Path,
    query: &Query,
    config: &LexisConfig,
    format: OutputFormat,
) -> Result<()> {
    let index = open(index_dir)?;
    if config.storage.use_mmap {
        execute(index.mapped_reader(), query, config, format)
    } else {
        execute(index.reader()?, query, config, format)
    }
}

fn open(index_dir: &Path) -> Result<TermIndex> {
    TermIndex::open(index_dir).with_context(|| format!("cannot open index {}", index_dir.display()))
}

fn execute<S: BlockSource>(
    mut reader: StreamingTrieReader<S>,
    query: &Query,
    config: &LexisConfig,
    format: OutputFormat,
) -> Result<()> {
    let words = match query {
        Query::Has(term) => {
            let postings = reader.postings(term)?;
            return output::print_lookup(term, postings, format);
        }
        Query::Prefix(prefix) => {
            let mut words = reader.starts_with(prefix)?;
            words.sort_by(|a, b| a.value.cmp(&b.value));
            words
        }
        Query::Near(term, max_edits) => reader.near(term, *max_edits)?,
        Query::Dump => reader.words()?,
    };

    let words = cap_results(words, config.search.max_results);
    output::print_words(&words, format)
}

/// Truncates to `max_results`; `near` output is already sorted, so the
/// closest terms survive.
pub fn cap_results(mut words: Vec<Word>, max_results: usize) -> Vec<Word> {
    if words.len() > max_results {
        tracing::warn!(
            total = words.len(),
            max_results,
            "results truncated to search.max_results"
        );
        words.truncate(max_results);
    }
    words
}
