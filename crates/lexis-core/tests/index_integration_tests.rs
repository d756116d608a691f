//! Integration tests: build a vocabulary, persist it, query it back through
//! every backend.
//!
//! The in-memory trie, the file-streaming reader and the memory-mapped
//! reader must agree on every query for the same vocabulary.
#![cfg(feature = "persistence")]
#![allow(clippy::uninlined_format_args)]

use lexis_core::{levenshtein, write_index, BlockLocator, LcrsTrie, TermIndex, TermSearch, Word};
use std::collections::BTreeSet;
use tempfile::TempDir;

const VOCABULARY: &[&str] = &[
    "search", "searched", "searcher", "searching", "seas", "season", "seat", "secure", "security",
    "see", "seed", "seek", "seem", "seen", "index", "indexed", "indexer", "indices", "inverted",
    "term", "terms", "terminal", "test", "tested", "testing", "text", "trie", "tree", "trees",
    "été", "ünïcode",
];

fn build_trie() -> LcrsTrie {
    let mut trie = LcrsTrie::new();
    let mut offset = 0u64;
    for (i, term) in VOCABULARY.iter().enumerate() {
        let length = 16 + i as u32;
        trie.insert(term, BlockLocator::new(offset, length))
            .expect("insert");
        offset += u64::from(length);
    }
    trie
}

fn values(words: &[Word]) -> BTreeSet<String> {
    words.iter().map(|w| w.value.clone()).collect()
}

/// Runs the same query battery against any backend.
fn query_battery(search: &mut dyn TermSearch) -> Vec<String> {
    let mut out = Vec::new();
    for candidate in ["search", "sea", "seas", "index", "tre", "zzz", "été", "s"] {
        out.push(format!("has {candidate}: {}", search.has_word(candidate).expect("has_word")));
        let prefixed = values(&search.starts_with(candidate).expect("starts_with"));
        out.push(format!("prefix {candidate}: {:?}", prefixed));
    }
    for (query, k) in [("serch", 1), ("tesst", 1), ("tree", 2), ("indx", 1), ("ete", 2)] {
        out.push(format!("near {query}/{k}: {:?}", search.near(query, k).expect("near")));
    }
    out
}

#[test]
fn test_backends_agree() {
    // Arrange
    let dir = TempDir::new().expect("temp dir");
    let mut trie = build_trie();
    write_index(dir.path(), &trie).expect("write index");
    let index = TermIndex::open(dir.path()).expect("open index");

    // Act
    let in_memory = query_battery(&mut trie);
    let streamed = query_battery(&mut index.reader().expect("reader"));
    let mapped = query_battery(&mut index.mapped_reader());

    // Assert
    assert_eq!(in_memory, streamed);
    assert_eq!(in_memory, mapped);
}

#[test]
fn test_persisted_vocabulary_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let trie = build_trie();
    let meta = write_index(dir.path(), &trie).expect("write index");

    let index = TermIndex::open(dir.path()).expect("open index");
    let mut reader = index.reader().expect("reader");

    assert_eq!(meta.term_count as usize, VOCABULARY.len());
    assert_eq!(meta.node_count as usize, trie.node_count());
    let expected: BTreeSet<String> = VOCABULARY.iter().map(|t| (*t).to_string()).collect();
    assert_eq!(values(&reader.words().expect("words")), expected);
    for term in VOCABULARY {
        assert!(reader.has_word(term).expect("has_word"), "{term} missing");
        assert_eq!(
            reader.postings(term).expect("postings"),
            trie.postings(term).expect("postings")
        );
    }
}

#[test]
fn test_near_results_are_bounded_and_sorted() {
    let dir = TempDir::new().expect("temp dir");
    write_index(dir.path(), &build_trie()).expect("write index");
    let index = TermIndex::open(dir.path()).expect("open index");
    let mut reader = index.mapped_reader();

    for (query, k) in [("seek", 2), ("terminl", 1), ("x", 3)] {
        let words = reader.near(query, k).expect("near");

        let brute: BTreeSet<String> = VOCABULARY
            .iter()
            .filter(|t| levenshtein::distance(query, t) <= k)
            .map(|t| (*t).to_string())
            .collect();
        assert_eq!(values(&words), brute, "query {query} k {k}");
        assert!(words.windows(2).all(|w| w[0].distance <= w[1].distance));
        for word in &words {
            assert_eq!(word.distance, levenshtein::distance(query, &word.value));
        }
    }
}

#[test]
fn test_concurrent_readers_on_one_index() {
    // Arrange
    let dir = TempDir::new().expect("temp dir");
    write_index(dir.path(), &build_trie()).expect("write index");
    let index = TermIndex::open(dir.path()).expect("open index");

    // Act - one reader per thread, all over the same map
    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let mut reader = index.mapped_reader();
                scope.spawn(move || reader.starts_with("se").expect("starts_with").len())
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread"))
            .collect()
    });

    // Assert
    assert!(counts.iter().all(|&c| c == 14), "{:?}", counts);
}
